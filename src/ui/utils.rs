use colorgrad::Gradient;
use eframe::egui::text::LayoutJob;
use eframe::egui::{
    Color32, Context, CornerRadius, FontId, Mesh, Pos2, Rect, Shape, TextFormat, Ui, Visuals,
};

use crate::ui::config::UI_CONFIG;

/// Number of vertical strips used to approximate a gradient fill
const GRADIENT_STEPS: usize = 24;

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::light();

    visuals.window_fill = UI_CONFIG.colors.background;
    visuals.panel_fill = UI_CONFIG.colors.panel;

    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Creates a separator with standard spacing
pub fn spaced_separator(ui: &mut Ui) {
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Samples `stops` into `n` evenly spaced colors.
/// Falls back to a flat heading color if the stops cannot be parsed.
pub fn gradient_colors(stops: &[&str], n: usize) -> Vec<Color32> {
    let n = n.max(1);
    match colorgrad::GradientBuilder::new()
        .html_colors(stops)
        .build::<colorgrad::LinearGradient>()
    {
        Ok(grad) => (0..n)
            .map(|i| {
                let t = if n == 1 { 0.0 } else { i as f32 / (n - 1) as f32 };
                to_egui_color(grad.at(t))
            })
            .collect(),
        Err(e) => {
            log::warn!("Invalid gradient stops {:?}: {}", stops, e);
            vec![UI_CONFIG.colors.heading; n]
        }
    }
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

/// Fills `rect` with a left-to-right gradient.
pub fn paint_gradient_rect(ui: &Ui, rect: Rect, stops: &[&str]) {
    let colors = gradient_colors(stops, GRADIENT_STEPS + 1);
    let mut mesh = Mesh::default();
    for (i, color) in colors.iter().enumerate() {
        let x = rect.left() + rect.width() * i as f32 / GRADIENT_STEPS as f32;
        mesh.colored_vertex(Pos2::new(x, rect.top()), *color);
        mesh.colored_vertex(Pos2::new(x, rect.bottom()), *color);
    }
    for i in 0..GRADIENT_STEPS as u32 {
        let base = i * 2;
        mesh.add_triangle(base, base + 1, base + 2);
        mesh.add_triangle(base + 1, base + 2, base + 3);
    }
    ui.painter().add(Shape::mesh(mesh));
}

/// Rounded flat-colored rect. Gradient meshes are square, so rounded
/// shapes use the midpoint color instead.
pub fn paint_rounded(ui: &Ui, rect: Rect, radius: f32, stops: &[&str]) {
    let mid = gradient_colors(stops, 3)[1];
    ui.painter()
        .rect_filled(rect, CornerRadius::same(radius.round() as u8), mid);
}

/// Heading text colored character by character along a gradient.
pub fn gradient_text(text: &str, size: f32, stops: &[&str]) -> LayoutJob {
    let chars: Vec<char> = text.chars().collect();
    let colors = gradient_colors(stops, chars.len());
    let mut job = LayoutJob::default();
    for (ch, color) in chars.iter().zip(colors) {
        job.append(
            &ch.to_string(),
            0.0,
            TextFormat {
                font_id: FontId::proportional(size),
                color,
                ..Default::default()
            },
        );
    }
    job
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_endpoints_match_stops() {
        let colors = gradient_colors(&["#ff0000", "#0000ff"], 5);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0], Color32::from_rgb(255, 0, 0));
        assert_eq!(colors[4], Color32::from_rgb(0, 0, 255));
    }

    #[test]
    fn bad_stops_fall_back_to_flat_color() {
        let colors = gradient_colors(&["not-a-color"], 3);
        assert_eq!(colors, vec![UI_CONFIG.colors.heading; 3]);
    }

    #[test]
    fn gradient_text_has_one_section_per_char() {
        let job = gradient_text("Deck", 20.0, &["#9b87f5", "#d946ef"]);
        assert_eq!(job.sections.len(), 4);
        assert_eq!(job.text, "Deck");
    }
}
