//! Character constants for background animations.

/// Glyph bank for matrix rain: katakana, upper-case latin and digits.
pub const MATRIX_GLYPHS: &str = "アァカサタナハマヤャラワガザダバパイィキシチニヒミリヰギジヂビピウゥクスツヌフムユュルグズヅブプエェケセテネヘメレヱゲゼデベペオォコソトノホモヨョロヲゴゾドボポヴッンABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Symbols for stars, from the smallest radius to the largest.
pub const STAR_CHARS: [char; 3] = ['·', '•', '✦'];
