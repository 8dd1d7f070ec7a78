//! Ordered textual rewrites applied to the program body.
//!
//! [`BODY_RULES`] is the whole pipeline. Rules run one after another over
//! the full text, each seeing the output of the previous one, so the order
//! of the list is part of the contract:
//!
//! 1. `CIO` bits, then `CIO` words (a word rule must not see `CIO1.2`)
//! 2. `W` bits and words
//! 3. `D` words
//! 4. `H` bits, moved up by [`HOLDING_OFFSET`](super::address::HOLDING_OFFSET)
//! 5. timers and counters, long forms before short forms
//! 6. `MOV`, `SET`, `RSET` calls to assignments
//! 7. `IF`/`ELSIF` header spacing
//! 8. `;` after `END_IF`, `END_WHILE`, `END_FOR`
//!
//! Region rules skip any match that is already part of a directly
//! represented address (`%QW100` is not a `W100`). Rewrites are textual;
//! matches inside comments and string literals are rewritten too.

use super::address::holding_word;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Position of a match within the text a rule is applied to.
pub struct Context<'t> {
    text: &'t str,
    start: usize,
    end: usize,
}

impl<'t> Context<'t> {
    /// Text before the match.
    pub fn before(&self) -> &'t str {
        &self.text[..self.start]
    }

    /// Text after the match.
    pub fn after(&self) -> &'t str {
        &self.text[self.end..]
    }
}

/// Produces the replacement for a match, or `None` to leave it untouched.
pub type Rewrite = fn(&Captures<'_>, &Context<'_>) -> Option<String>;

/// A named pattern plus its rewrite.
pub struct RewriteRule {
    pub name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
}

impl RewriteRule {
    pub fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("rewrite pattern compiles"),
            rewrite,
        }
    }

    /// Apply this rule to every non-overlapping match in `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        let mut count = 0;

        for caps in self.pattern.captures_iter(text) {
            let Some(m) = caps.get(0) else {
                continue;
            };
            let ctx = Context {
                text,
                start: m.start(),
                end: m.end(),
            };
            if let Some(replacement) = (self.rewrite)(&caps, &ctx) {
                out.push_str(&text[last..m.start()]);
                out.push_str(&replacement);
                last = m.end();
                count += 1;
            }
        }
        out.push_str(&text[last..]);

        if count > 0 {
            tracing::debug!(rule = self.name, count, "rewrote");
        }
        out
    }
}

/// Apply `rules` in order.
pub fn apply_rules(rules: &[RewriteRule], text: &str) -> String {
    rules
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// The body pipeline, in application order.
pub static BODY_RULES: LazyLock<Vec<RewriteRule>> = LazyLock::new(|| {
    vec![
        // Region 1: core I/O
        RewriteRule::new("cio-bit", r"CIO(\d+)\.(\d+)", |c, ctx| {
            region(ctx, format!("%QX{}.{}", group(c, 1), group(c, 2)))
        }),
        RewriteRule::new("cio-word", r"CIO(\d+)", |c, ctx| {
            word(ctx, format!("%QW{}", group(c, 1)))
        }),
        // Region 2: work area
        RewriteRule::new("w-bit", r"W(\d+)\.(\d+)", |c, ctx| {
            region(ctx, format!("%MX{}.{}", group(c, 1), group(c, 2)))
        }),
        RewriteRule::new("w-word", r"W(\d+)", |c, ctx| {
            word(ctx, format!("%MW{}", group(c, 1)))
        }),
        // Region 3: data memory
        RewriteRule::new("d-word", r"D(\d+)", |c, ctx| {
            word(ctx, format!("%MD{}", group(c, 1)))
        }),
        // Region 4: holding area, offset past the work-area bits
        RewriteRule::new("h-bit", r"H(\d+)\.(\d+)", |c, ctx| {
            let w = holding_word(group(c, 1))?;
            region(ctx, format!("%MX{w}.{}", group(c, 2)))
        }),
        // Timers and counters
        RewriteRule::new("tim", r"\bTIM(\d+)\b", |c, _| {
            Some(format!("%MT{}", group(c, 1)))
        }),
        RewriteRule::new("cnt", r"\bCNT(\d+)\b", |c, _| {
            Some(format!("%MC{}", group(c, 1)))
        }),
        RewriteRule::new("t", r"\bT(\d+)\b", |c, _| {
            Some(format!("%MT{}", group(c, 1)))
        }),
        RewriteRule::new("c", r"\bC(\d+)\b", |c, _| {
            Some(format!("%MC{}", group(c, 1)))
        }),
        // Instructions
        RewriteRule::new("mov", r"(?i)\bMOV\(([^,]+),\s*([^)]+)\);?", |c, _| {
            Some(format!("{} := {};", group(c, 2).trim(), group(c, 1).trim()))
        }),
        RewriteRule::new("set", r"(?i)\bSET\(([^)]+)\);?", |c, _| {
            Some(format!("{} := TRUE;", group(c, 1).trim()))
        }),
        RewriteRule::new("rset", r"(?i)\bRSET\(([^)]+)\);?", |c, _| {
            Some(format!("{} := FALSE;", group(c, 1).trim()))
        }),
        // Syntax
        RewriteRule::new(
            "if-header",
            r"(?i)\b(IF|ELSIF)[ \t]+([^\n]+?)[ \t]+THEN\b",
            |c, _| {
                Some(format!(
                    "{} {} THEN",
                    group(c, 1).to_uppercase(),
                    group(c, 2)
                ))
            },
        ),
        RewriteRule::new(
            "end-semicolon",
            r"(?i)\b(END_IF|END_WHILE|END_FOR)\b",
            |c, ctx| {
                if ctx.after().trim_start_matches([' ', '\t']).starts_with(';') {
                    return None;
                }
                Some(format!("{};", group(c, 1).to_uppercase()))
            },
        ),
    ]
});

fn group<'t>(caps: &Captures<'t>, i: usize) -> &'t str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Whether the match directly follows an IEC direct-address prefix such as
/// `%Q` or `%M`, i.e. it was produced by an earlier rule.
fn in_direct_address(ctx: &Context<'_>) -> bool {
    let mut rev = ctx.before().chars().rev();
    matches!(
        (rev.next(), rev.next()),
        (Some(area), Some('%')) if area.is_ascii_uppercase()
    )
}

fn region(ctx: &Context<'_>, replacement: String) -> Option<String> {
    (!in_direct_address(ctx)).then_some(replacement)
}

/// Word forms apply only when the number is not followed by a bit.
fn word(ctx: &Context<'_>, replacement: String) -> Option<String> {
    if ctx.after().starts_with('.') {
        return None;
    }
    region(ctx, replacement)
}
