//! Message text utilities

/// Joins fragments the way they read in an English sentence.
///
/// `["a"]` gives `"a"`, `["a", "b"]` gives `"a and b"` and
/// `["a", "b", "c"]` gives `"a, b and c"`. An empty slice gives `""`.
pub fn join_grammatically<S: AsRef<str>>(parts: &[S]) -> String {
    match parts {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}
