/// Environment key holding the default PNG destination of `mandel render`.
pub const OUTPUT_VAR: &str = "MANDEL_OUTPUT";

/// Loads a `.env` file from the working directory (or its parents) if one exists.
/// Variables already present in the process environment win.
pub fn init() {
    dotenv::dotenv().ok();
}
