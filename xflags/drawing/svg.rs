//! Simple SVG immediate drawing utilities
#![allow(clippy::missing_errors_doc, clippy::new_ret_no_self)]

use crate::drawing::Color;
use std::fmt::{self, Write};

/// Object that can be rendered as SVG
pub trait Svg {
    /// Render object as SVG
    fn to_svg<W>(&self, w: &mut W) -> fmt::Result
    where
        W: Write;
}

/// SVG renderer
pub struct ImmSvg;

/// SVG text element anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    /// The rendered characters are aligned such that the start of the text string is at the
    /// initial current text position
    Start,

    /// The rendered characters are aligned such that the middle of the text string is at the
    /// current text position
    Middle,
}

impl TextAnchor {
    /// Get text anchor as string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
        }
    }
}

/// SVG text element
#[derive(Debug, Clone)]
pub struct Text {
    /// X position
    pub x: i64,
    /// Y position
    pub y: i64,
    /// Text to display, escaped on output
    pub text: String,
    /// Text anchor
    pub text_anchor: TextAnchor,
    /// Font size in pixels
    pub font_size: u32,
    /// Render with bold font weight
    pub bold: bool,
}

impl Default for Text {
    fn default() -> Self {
        Self {
            x: 0,
            y: 0,
            text: String::new(),
            text_anchor: TextAnchor::Start,
            font_size: 10,
            bold: false,
        }
    }
}

/// SVG circle element
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    /// X position of circle center
    pub cx: i64,

    /// Y position of circle center
    pub cy: i64,

    /// Circle radius
    pub r: u32,

    /// Stroke color
    pub stroke: Color,

    /// Stroke width
    pub stroke_width: u32,

    /// Fill color
    pub fill: Color,
}

fn escape<W>(w: &mut W, text: &str) -> fmt::Result
where
    W: Write,
{
    for c in text.chars() {
        match c {
            '<' => w.write_str("&lt;")?,
            '>' => w.write_str("&gt;")?,
            '&' => w.write_str("&amp;")?,
            '"' => w.write_str("&quot;")?,
            c => w.write_char(c)?,
        }
    }
    Ok(())
}

impl ImmSvg {
    /// Create new SVG
    pub fn new<W>(
        w: &mut W,
        width: u64,
        height: u64,
        cont: impl FnOnce(&mut W) -> fmt::Result,
    ) -> fmt::Result
    where
        W: Write,
    {
        write!(
            w,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">",
            width, height
        )?;
        cont(w)?;
        write!(w, "</svg>")
    }

    /// Create [group element](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/g)
    pub fn g<W>(w: &mut W, fill: Color, cont: impl FnOnce(&mut W) -> fmt::Result) -> fmt::Result
    where
        W: Write,
    {
        write!(w, "<g fill=\"{}\">", fill)?;
        cont(w)?;
        write!(w, "</g>")
    }

    /// Create [rectangle element](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/rect)
    pub fn rect<W>(w: &mut W, x: i64, y: i64, width: u64, height: u64, fill: Color) -> fmt::Result
    where
        W: Write,
    {
        write!(
            w,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" style=\"fill:{};\"/>",
            x, y, width, height, fill,
        )
    }

    /// Create [text element](https://developer.mozilla.org/en-US/docs/Web/SVG/Element/text)
    pub fn text<W>(w: &mut W, text: &Text) -> fmt::Result
    where
        W: Write,
    {
        write!(
            w,
            "<text text-anchor=\"{}\" x=\"{}\" y=\"{}\" font-size=\"{}\" font-weight=\"{}\">",
            text.text_anchor.as_str(),
            text.x,
            text.y,
            text.font_size,
            if text.bold { "bold" } else { "normal" },
        )?;
        escape(w, &text.text)?;
        write!(w, "</text>")
    }

    /// Create circle element
    pub fn circle<W>(w: &mut W, circle: &Circle) -> fmt::Result
    where
        W: Write,
    {
        write!(
            w,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"{}\"/>",
            circle.cx, circle.cy, circle.r, circle.stroke, circle.stroke_width, circle.fill,
        )
    }
}
