//! Documented function catalog of the `LambdaData` library.
//!
//! Only names, signatures and summaries are registered here. The functions
//! themselves live in the library.

use lambda_docs::{define_doc_gatherer, submit_functions};

submit_functions! {
    "LambdaData";

    /// Infinite arithmetic sequence.
    ///
    /// Starts at `start` and advances by `step`. Iteration stops before `stop`
    /// when it is given.
    fn iota(start, stop = None, step = 1) -> "Iterator";

    /// Infinite sequence of results of calling `func` with the given arguments.
    fn generate(func, *args, **kwargs) -> "Iterator";

    /// The first `n` results of calling `func` with the given arguments.
    fn generate_n(n, func, *args, **kwargs) -> "Iterator";

    /// Sequence of length `count` where every element is `array`.
    fn fork(array, count = 2) -> "Iterator";

    /// Running reduction of `array`, including the current element.
    ///
    /// The first output is `initial` combined with the first element.
    fn inclusive_scan(array, initial) -> "Iterator";

    /// Running reduction of `array`, excluding the current element.
    ///
    /// The first output is `initial`.
    fn exclusive_scan(array, initial) -> "Iterator";

    /// Lazily applies `func` to every element of `array`.
    fn transform(array, func) -> "Iterator";

    /// Difference of each element and its predecessor.
    ///
    /// The first element is passed through unchanged.
    fn adjacent_difference(array) -> "Iterator";

    /// Running sum of `array`.
    fn partial_sum(array) -> "Iterator";

    /// Stable partition of `array` by `predicate`.
    ///
    /// Elements satisfying the predicate come first.
    fn partition(array, predicate) -> "List";

    /// Folds `array` from the left with `func`, seeded with `initial`.
    fn reduce(array, func, initial = None) -> "Any";

    /// Sum of `array` after applying `func` to every element.
    fn accumulate(array, func = None) -> "Any";

    /// Product of `array`.
    fn product(array) -> "Any";

    /// Smallest and largest element of `array`.
    fn min_max(array) -> "Tuple";

    /// Sum of all positional arguments.
    fn star_sum(*args) -> "Any";

    /// Product of all positional arguments.
    fn star_product(*args) -> "Any";

    /// True when `predicate` holds for every element of `array`.
    fn all_of(array, predicate) -> "bool";

    /// True when `predicate` holds for at least one element of `array`.
    fn any_of(array, predicate) -> "bool";

    /// True when `predicate` holds for no element of `array`.
    fn none_of(array, predicate) -> "bool";

    /// Applies `transform_func` to every element, then folds with `reduce_func`.
    fn transform_reduce(array, transform_func, reduce_func) -> "Any";

    /// Sum of the pairwise products of two equal length sequences.
    fn inner_product(array_a, array_b) -> "Any";

    /// Product of two matrices given as nested lists.
    fn matrix_multiply(left, right) -> "List";

    /// Applies `func` across the i-th elements of every input sequence.
    fn zip_transform(func, *args) -> "Iterator";

    /// Column sums of a two dimensional sequence.
    fn transposed_sums(*args) -> "List";

    /// Elements present in any of the input sets.
    fn union(*args) -> "Set";

    /// Elements present in every input set.
    fn intersection(*args) -> "Set";

    /// Elements of the first set missing from all the others.
    fn difference(*args) -> "Set";

    /// Elements present in an odd number of the input sets.
    fn symmetric_difference(*args) -> "Set";

    /// Difference between the largest and the smallest value of a column.
    fn value_span(data, column) -> "Any";

    /// Concatenates data frames row-wise.
    fn star_cat_row(*dfs) -> "DataFrame";

    /// Concatenates data frames column-wise.
    fn star_cat_col(*dfs) -> "DataFrame";

    /// Random integer in the range `[start, stop)` stepping by `step`.
    ///
    /// Negative `step` walks down from the larger bound. Returns `start` when
    /// the range is empty or `step` is zero.
    fn random_range(start, stop = 0, step = 1) -> "int";

    /// Shuffles `array` in place.
    fn shuffle(array) -> "None";

    /// Callable returning a random element of a copy of `data` on every call.
    class TruffleShuffle(data);
}

define_doc_gatherer!(doc_set, "make_docs.toml");
