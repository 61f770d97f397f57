//! Brace policy options.
//!
//! Hosts configure the checker with string tokens (`"else"`, `"consistent"`,
//! `"braced-child"`, `"nested-if-else"`). They are parsed once into an
//! immutable [`BraceOptions`] set before a pass starts.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

bitflags! {
    /// Active brace policy.
    ///
    /// The empty set is the default policy: braces are required only where a
    /// block holds other than exactly one statement, or where dropping them
    /// would re-parent a dangling `else`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct BraceOptions: u8 {
        /// Fully brace any conditional that is, or belongs to, an if/else chain.
        const ELSE = 1 << 0;
        /// Both branches of a conditional match: one needing braces forces both.
        const CONSISTENT = 1 << 1;
        /// Extend the requirement into nested switch, conditional, and loop bodies.
        const BRACED_CHILD = 1 << 2;
        /// Always brace a bare nested if/else used as a branch body.
        const NESTED_IF_ELSE = 1 << 3;
    }
}

impl BraceOptions {
    #[inline]
    pub const fn else_chain(self) -> bool {
        self.contains(Self::ELSE)
    }

    #[inline]
    pub const fn consistent(self) -> bool {
        self.contains(Self::CONSISTENT)
    }

    #[inline]
    pub const fn braced_child(self) -> bool {
        self.contains(Self::BRACED_CHILD)
    }

    #[inline]
    pub const fn nested_if_else(self) -> bool {
        self.contains(Self::NESTED_IF_ELSE)
    }

    /// Build options from host configuration tokens.
    ///
    /// Unknown tokens are logged and treated as absent.
    pub fn from_arguments<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = BraceOptions::empty();
        for arg in args {
            match arg.as_ref().parse::<BraceOption>() {
                Ok(option) => options |= option.flag(),
                Err(err) => tracing::warn!(token = %err.token, "ignoring unknown curly option"),
            }
        }
        options
    }
}

/// Renders the configuration tokens of the set, comma separated.
impl fmt::Display for BraceOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for option in BraceOption::ALL {
            if self.contains(option.flag()) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(option.token())?;
                first = false;
            }
        }
        Ok(())
    }
}

/// A single configuration token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BraceOption {
    Else,
    Consistent,
    BracedChild,
    NestedIfElse,
}

impl BraceOption {
    /// Every option, in canonical order.
    pub const ALL: [BraceOption; 4] = [
        BraceOption::Else,
        BraceOption::Consistent,
        BraceOption::BracedChild,
        BraceOption::NestedIfElse,
    ];

    /// The configuration token naming this option.
    pub const fn token(self) -> &'static str {
        match self {
            BraceOption::Else => "else",
            BraceOption::Consistent => "consistent",
            BraceOption::BracedChild => "braced-child",
            BraceOption::NestedIfElse => "nested-if-else",
        }
    }

    pub const fn flag(self) -> BraceOptions {
        match self {
            BraceOption::Else => BraceOptions::ELSE,
            BraceOption::Consistent => BraceOptions::CONSISTENT,
            BraceOption::BracedChild => BraceOptions::BRACED_CHILD,
            BraceOption::NestedIfElse => BraceOptions::NESTED_IF_ELSE,
        }
    }
}

impl From<BraceOption> for BraceOptions {
    fn from(option: BraceOption) -> Self {
        option.flag()
    }
}

impl FromStr for BraceOption {
    type Err = UnknownOptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BraceOption::ALL
            .into_iter()
            .find(|option| option.token() == s)
            .ok_or_else(|| UnknownOptionError {
                token: s.to_string(),
            })
    }
}

impl fmt::Display for BraceOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A configuration token that names no option.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown curly option `{token}`")]
pub struct UnknownOptionError {
    pub token: String,
}

#[cfg(test)]
mod tests;
