use typed_builder::TypedBuilder;

/// Caller-side bounds on a pattern search.
#[derive(TypedBuilder, Default, Debug, Clone)]
pub struct SearchConfig {
    #[builder(default, setter(strip_option))]
    pub max_results: Option<usize>,
    /// Longest pattern accepted, in characters.
    #[builder(default, setter(strip_option))]
    pub max_pattern_len: Option<usize>,
}

impl SearchConfig {
    pub fn new() -> SearchConfig {
        Default::default()
    }
}
