use lambda_docs::Result;
use std::io;

fn main() -> Result<()> {
    env_logger::init();
    let doc_set = lambda_docs_catalog::doc_set()?;
    doc_set.generate(io::stdout().lock())?;
    Ok(())
}
