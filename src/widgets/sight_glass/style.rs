use rand::Rng;

use crate::widgets::Color;

/// Colors of the glass overlays, the liquid and each wave
#[derive(Clone, Debug, PartialEq)]
pub struct GlassStyle {
    /// Tint of the horizontal gradients beneath and above the liquid
    pub glass_color: Option<Color>,
    /// Tint of the vertical shading gradient on top of everything
    pub glass_shade: Option<Color>,
    pub liquid_color: Color,
    pub wave_colors: Vec<Color>,
}

impl GlassStyle {
    pub fn new(wave_count: usize) -> Self {
        Self {
            glass_color: None,
            glass_shade: None,
            liquid_color: Color::WHITE,
            wave_colors: vec![Color::WHITE; wave_count],
        }
    }

    /// Set the liquid color and derive a fresh, slightly varied tint per wave
    pub fn set_liquid_color<R: Rng + ?Sized>(&mut self, color: Color, rng: &mut R) {
        self.liquid_color = color;
        for (index, wave_color) in self.wave_colors.iter_mut().enumerate() {
            *wave_color = wave_tint(color, index, rng);
        }
    }
}

/// Tint for wave `index`: the liquid color shifted by a random amount in
/// [-0.5, 0.5), with deeper waves more opaque up to 0.5 alpha.
pub fn wave_tint<R: Rng + ?Sized>(liquid: Color, index: usize, rng: &mut R) -> Color {
    let shift = rng.gen_range(-100..100) as f32 / 200.0;
    Color::rgba(
        (liquid.r + shift).min(1.0),
        (liquid.g + shift).min(1.0),
        (liquid.b + shift).min(1.0),
        (0.1 + index as f32 / 10.0).min(0.5),
    )
}
