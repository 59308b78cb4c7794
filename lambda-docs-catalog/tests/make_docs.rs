use lambda_docs::{DocPlan, DocSet, GroupPlan, UnresolvedReference};
use test_case::test_case;

#[test]
fn test_plan_resolves() {
    let doc_set = lambda_docs_catalog::doc_set().unwrap();
    doc_set.validate().unwrap();
    assert_eq!(doc_set.namespace.name, "LambdaData");
    assert_eq!(doc_set.namespace.function.len(), 34);
}

#[test]
fn test_group_order() {
    let doc_set = lambda_docs_catalog::doc_set().unwrap();
    let titles: Vec<_> = doc_set.plan.groups.iter().map(|g| g.title.as_str()).collect();
    assert_eq!(
        titles,
        [
            "Generators",
            "Expansions",
            "Transforms",
            "Permutations",
            "Reductions",
            "Queries",
            "Transform & Reduce",
            "Multidimensional Reductions",
            "Multi-Set Operations",
            "Pandas Helpers",
            "Randomizers",
        ]
    );

    let out = doc_set.render().unwrap();
    let headings: Vec<_> = out
        .lines()
        .filter_map(|line| line.strip_prefix("## "))
        .collect();
    assert_eq!(headings, titles);
}

#[test]
fn test_output_starts_with_generators() {
    let out = lambda_docs_catalog::doc_set().unwrap().render().unwrap();
    assert!(out.starts_with(
        "\n## Generators\n\n\
         ### `LambdaData.iota`\n\
         ```\n\
         Help on function iota in module LambdaData:\n\
         \n\
         iota(start, stop=None, step=1) -> Iterator\n    \
         Infinite arithmetic sequence.\n"
    ));
}

#[test_case("generate_n", "function", "generate_n(n, func, *args, **kwargs) -> Iterator" ; "variadic")]
#[test_case("random_range", "function", "random_range(start, stop=0, step=1) -> int" ; "defaults")]
#[test_case("TruffleShuffle", "class", "TruffleShuffle(data)" ; "callable class")]
fn test_signature(name: &str, kind: &str, signature: &str) {
    let doc_set = lambda_docs_catalog::doc_set().unwrap();
    let def = doc_set.namespace.resolve(name).unwrap();
    assert_eq!(def.to_string(), signature);
    assert!(doc_set
        .render()
        .unwrap()
        .contains(&format!("### `LambdaData.{name}`\n```\nHelp on {kind} {name} in module LambdaData:\n\n{signature}\n")));
}

#[test]
fn test_every_member_is_fenced() {
    let out = lambda_docs_catalog::doc_set().unwrap().render().unwrap();
    let members = out.lines().filter(|line| line.starts_with("### ")).count();
    let fences = out.lines().filter(|line| *line == "```").count();
    assert_eq!(members, 34);
    assert_eq!(fences, 2 * members);
}

#[test]
fn test_idempotent() {
    let first = lambda_docs_catalog::doc_set().unwrap().render().unwrap();
    let second = lambda_docs_catalog::doc_set().unwrap().render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_renamed_function_fails_fast() {
    let mut plan = lambda_docs_catalog::doc_set().unwrap().plan;
    plan.groups.insert(
        1,
        GroupPlan {
            title: "Legacy".to_string(),
            members: vec!["fork".to_string(), "truffle_shuffle".to_string()],
        },
    );
    let doc_set = DocSet::from_registry(plan);

    let mut out = Vec::new();
    let err = doc_set.generate(&mut out).unwrap_err();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("## Generators"));
    assert!(!out.contains("## Legacy"));
    assert!(!out.contains("## Expansions"));
    assert_eq!(
        err.downcast_ref::<UnresolvedReference>().unwrap().name,
        "truffle_shuffle"
    );
}

#[test]
fn test_foreign_namespace_is_empty() {
    let plan = DocPlan {
        namespace: "Fortuna".to_string(),
        groups: vec![GroupPlan {
            title: "Randomizers".to_string(),
            members: vec!["random_range".to_string()],
        }],
    };
    let err = DocSet::from_registry(plan).validate().unwrap_err();
    assert!(err
        .to_string()
        .contains("Cannot document group `Randomizers`"));
}
