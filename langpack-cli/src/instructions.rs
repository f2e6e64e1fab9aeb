//! Operator instructions printed after a successful run.

use std::path::Path;

use indoc::indoc;

/// Next-steps text shown once the translated pack has been written. Purely
/// informational; nothing here touches application state.
pub fn next_steps(language: &str, output: &Path) -> String {
    format!(
        indoc! {"
            **************************************
            Wrote {}

            Next steps:
            - Have a native speaker review the generated translations.
            - Register the language code `{}` in your application's language
              table so the new pack is served.
        "},
        output.display(),
        language
    )
}
