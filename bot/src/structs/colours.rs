use serenity::utils::Colour;

/// Colours used to tie a nominated post to the message it replied to. The
/// repeats at the tail are deliberate, see DESIGN.md.
pub const DEFAULT_PALETTE: [Colour; 19] = [
    Colour(0xF44336), // red
    Colour(0x00BCD4), // cyan
    Colour(0x9C27B0), // purple
    Colour(0xFFC107), // amber
    Colour(0x4CAF50), // green
    Colour(0xE91E63), // pink
    Colour(0x2196F3), // blue
    Colour(0xFF5722), // deep orange
    Colour(0x3F51B5), // indigo
    Colour(0xFF9800), // orange
    Colour(0xCDDC39), // lime
    Colour(0x9E9E9E), // grey
    Colour(0xFFEB3B), // yellow
    Colour(0x304FFE), // blue
    Colour(0xFF4081), // pink
    Colour(0x3F51B5), // indigo
    Colour(0x2196F3), // blue
    Colour(0xFF5722), // deep orange
    Colour(0xFF9800), // orange
];

/// Hands out palette colours in order, wrapping back to the start. One cycler
/// belongs to exactly one batch; it is never shared between invocations.
#[derive(Debug, Clone)]
pub struct ColourCycler {
    palette: Vec<Colour>,
    index: usize,
}

impl ColourCycler {
    /// An empty palette falls back to `DEFAULT_PALETTE`.
    pub fn new(palette: Vec<Colour>) -> ColourCycler {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            palette
        };
        ColourCycler { palette, index: 0 }
    }

    /// The colour the next call to `next_colour` hands out.
    #[inline]
    pub fn peek(&self) -> Colour {
        self.palette[self.index]
    }

    pub fn next_colour(&mut self) -> Colour {
        let colour = self.palette[self.index];
        self.index = (self.index + 1) % self.palette.len();
        colour
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.palette.len()
    }
}

impl Default for ColourCycler {
    fn default() -> Self {
        ColourCycler::new(DEFAULT_PALETTE.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_first_colour() {
        let mut cycler = ColourCycler::default();
        assert_eq!(cycler.next_colour(), DEFAULT_PALETTE[0]);
        assert_eq!(cycler.next_colour(), DEFAULT_PALETTE[1]);
    }

    #[test]
    fn test_wraps_after_palette_length() {
        let mut cycler = ColourCycler::default();
        let first = cycler.next_colour();
        for _ in 1..cycler.len() {
            cycler.next_colour();
        }
        assert_eq!(cycler.next_colour(), first);
    }

    #[test]
    fn test_twenty_nominations_wrap_once() {
        let mut cycler = ColourCycler::default();
        let colours: Vec<Colour> = (0..20).map(|_| cycler.next_colour()).collect();
        assert_eq!(cycler.len(), 19);
        assert_eq!(colours[19], colours[0]);
        assert_eq!(&colours[..19], &DEFAULT_PALETTE[..]);
    }

    #[test]
    fn test_never_leaves_palette() {
        let palette = vec![Colour(0x111111), Colour(0x222222), Colour(0x333333)];
        let mut cycler = ColourCycler::new(palette.clone());
        for _ in 0..100 {
            assert!(palette.contains(&cycler.next_colour()));
        }
    }

    #[test]
    fn test_peek_does_not_advance() {
        let mut cycler = ColourCycler::default();
        assert_eq!(cycler.peek(), DEFAULT_PALETTE[0]);
        assert_eq!(cycler.peek(), DEFAULT_PALETTE[0]);
        assert_eq!(cycler.next_colour(), DEFAULT_PALETTE[0]);
        assert_eq!(cycler.peek(), DEFAULT_PALETTE[1]);
    }

    #[test]
    fn test_independent_cyclers() {
        let mut first = ColourCycler::default();
        let mut second = ColourCycler::default();
        first.next_colour();
        first.next_colour();
        assert_eq!(second.next_colour(), DEFAULT_PALETTE[0]);
        assert_eq!(first.next_colour(), DEFAULT_PALETTE[2]);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let mut cycler = ColourCycler::new(Vec::new());
        assert_eq!(cycler.len(), DEFAULT_PALETTE.len());
        assert_eq!(cycler.next_colour(), DEFAULT_PALETTE[0]);
    }
}
