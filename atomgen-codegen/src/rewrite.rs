//! Generic-wrapper rewriting.
//!
//! Templates spell wrapped types generically (`Atomic<Int>`). Generated code
//! refers to the concrete alias instead (`IntA`), except in the one
//! expansion that declares that alias.

const CLOSE: char = '>';

/// Collapses `Wrapper<X>` into `X` + suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperRewriter {
    open: String,
    suffix: String,
}

impl WrapperRewriter {
    pub fn new(wrapper: &str, suffix: &str) -> Self {
        Self {
            open: format!("{}<", wrapper),
            suffix: suffix.to_string(),
        }
    }

    /// The token that starts a wrapped type, e.g. `Atomic<`.
    pub fn open_token(&self) -> &str {
        &self.open
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The alias name for a type (`Int` -> `IntA`).
    pub fn alias(&self, ty: &str) -> String {
        format!("{}{}", ty, self.suffix)
    }

    /// True when the operator binding is the type's own alias, which is the
    /// expansion that must keep the wrapper spelled out.
    pub fn is_sentinel(&self, operator: &str, ty: &str) -> bool {
        operator.len() == ty.len() + self.suffix.len()
            && operator.starts_with(ty)
            && operator.ends_with(self.suffix.as_str())
    }

    /// Rewrite `text` unless this expansion is the sentinel case.
    pub fn apply(&self, text: String, operator: &str, ty: &str) -> String {
        if self.is_sentinel(operator, ty) {
            text
        } else {
            self.strip(&text)
        }
    }

    /// Replace every `Wrapper<X>` with `X` + suffix.
    ///
    /// Scanning resumes at the spliced text, so nested wrappers collapse too.
    /// An open token with no closing `>` after it ends the scan and leaves
    /// the rest of the text untouched.
    pub fn strip(&self, text: &str) -> String {
        let mut out = text.to_string();
        let mut from = 0;

        while let Some(found) = out[from..].find(&self.open) {
            let start = from + found;
            let inner_start = start + self.open.len();
            let Some(close) = out[inner_start..].find(CLOSE) else {
                break;
            };
            let inner_end = inner_start + close;

            let replacement = format!("{}{}", &out[inner_start..inner_end], self.suffix);
            out.replace_range(start..inner_end + CLOSE.len_utf8(), &replacement);
            from = start;
        }

        out
    }

    /// Returns true if `text` has an open token with no closing `>` after it.
    pub fn has_unclosed(&self, text: &str) -> bool {
        text.match_indices(&self.open)
            .any(|(pos, _)| !text[pos + self.open.len()..].contains(CLOSE))
    }
}
