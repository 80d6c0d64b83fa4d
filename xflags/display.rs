//! Display utilities

use std::fmt::{self, Display, Write};

fn sep(w: &mut impl Write, separator: &str, xs: &[impl Display]) -> fmt::Result {
    for (idx, v) in xs.iter().enumerate() {
        if idx != 0 {
            write!(w, "{}", separator)?;
        }
        write!(w, "{}", v)?;
    }
    Ok(())
}

#[inline]
pub fn commas(w: &mut impl Write, xs: &[impl Display]) -> fmt::Result {
    sep(w, ", ", xs)
}

pub fn parens<W>(w: &mut W, middle: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
where
    W: Write,
{
    write!(w, "(")?;
    middle(w)?;
    write!(w, ")")
}
