use crate::units::Pt;

/// One of the fourteen standard Type1 fonts every PDF consumer must provide.
///
/// Listing exports lean on these instead of embedded faces: the body is set
/// in the Courier family (monospace, so a fixed characters-per-line budget is
/// meaningful) and titles in the Helvetica family. Because the fonts are not
/// embedded, no font file ever needs parsing; the renderer references them by
/// their PostScript base names.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BuiltinFont {
    Courier,
    CourierBold,
    CourierOblique,
    CourierBoldOblique,
    Helvetica,
    HelveticaBold,
    HelveticaOblique,
    HelveticaBoldOblique,
    TimesRoman,
    TimesBold,
    TimesItalic,
    TimesBoldItalic,
    Symbol,
    ZapfDingbats,
}

impl BuiltinFont {
    /// The PostScript name the font is referenced by in the PDF.
    pub fn base_name(self) -> &'static str {
        match self {
            BuiltinFont::Courier => "Courier",
            BuiltinFont::CourierBold => "Courier-Bold",
            BuiltinFont::CourierOblique => "Courier-Oblique",
            BuiltinFont::CourierBoldOblique => "Courier-BoldOblique",
            BuiltinFont::Helvetica => "Helvetica",
            BuiltinFont::HelveticaBold => "Helvetica-Bold",
            BuiltinFont::HelveticaOblique => "Helvetica-Oblique",
            BuiltinFont::HelveticaBoldOblique => "Helvetica-BoldOblique",
            BuiltinFont::TimesRoman => "Times-Roman",
            BuiltinFont::TimesBold => "Times-Bold",
            BuiltinFont::TimesItalic => "Times-Italic",
            BuiltinFont::TimesBoldItalic => "Times-BoldItalic",
            BuiltinFont::Symbol => "Symbol",
            BuiltinFont::ZapfDingbats => "ZapfDingbats",
        }
    }

    /// Whether every glyph of the font has the same advance width.
    pub fn is_fixed_pitch(self) -> bool {
        matches!(
            self,
            BuiltinFont::Courier
                | BuiltinFont::CourierBold
                | BuiltinFont::CourierOblique
                | BuiltinFont::CourierBoldOblique
        )
    }

    /// The advance width of a single glyph at the given size, for fixed-pitch
    /// fonts only. All Courier variants advance by 600/1000 em.
    ///
    /// This is the constant behind the characters-per-line budget in
    /// [`PageGeometry`](crate::layout::PageGeometry): an approximation of the
    /// rendered width, not a measured bound.
    pub fn char_advance(self, size: Pt) -> Option<Pt> {
        self.is_fixed_pitch().then(|| size * 0.6)
    }

    /// Approximate rendered width of `text` at the given size, for
    /// fixed-pitch fonts only.
    pub fn text_width(self, text: &str, size: Pt) -> Option<Pt> {
        let advance = self.char_advance(size)?;
        Some(advance * text.chars().count() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn courier_is_fixed_pitch() {
        assert!(BuiltinFont::Courier.is_fixed_pitch());
        assert!(!BuiltinFont::HelveticaBold.is_fixed_pitch());
    }

    #[test]
    fn courier_advance_is_six_tenths_em() {
        assert_eq!(BuiltinFont::Courier.char_advance(Pt(10.0)), Some(Pt(6.0)));
        assert_eq!(BuiltinFont::Helvetica.char_advance(Pt(10.0)), None);
    }

    #[test]
    fn text_width_counts_characters() {
        let w = BuiltinFont::Courier.text_width("abcd", Pt(10.0));
        assert_eq!(w, Some(Pt(24.0)));
    }
}
