use heart_core::{CameraState, ParticleField, Viewport};
use web_sys as web;

use crate::constants::TRAIL_STOPS;

/// Pre-format one CSS color per particle; hue and lightness never change
/// after construction.
pub fn particle_colors(field: &ParticleField) -> Vec<String> {
    field
        .particles
        .iter()
        .map(|p| format!("hsl({:.0}, 100%, {:.0}%)", p.hue % 360.0, p.lightness))
        .collect()
}

/// Paint one frame: fade the previous frame with a translucent gradient to
/// leave motion trails, then draw every particle as an additively blended
/// disc sized by its perspective scale.
pub fn paint(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    field: &ParticleField,
    camera: &CameraState,
    colors: &[String],
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let viewport = Viewport::new(width as f32, height as f32);

    let gradient = ctx.create_linear_gradient(0.0, 0.0, width, height);
    for (offset, color) in &TRAIL_STOPS {
        let _ = gradient.add_color_stop(*offset, color);
    }
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill_rect(0.0, 0.0, width, height);

    let _ = ctx.set_global_composite_operation("lighter");
    for (p, color) in field.particles.iter().zip(colors) {
        if let Some(proj) = camera.project(p.position, viewport) {
            ctx.set_fill_style_str(color);
            ctx.begin_path();
            let _ = ctx.arc(
                proj.x as f64,
                proj.y as f64,
                (p.radius * proj.scale) as f64,
                0.0,
                std::f64::consts::TAU,
            );
            ctx.fill();
        }
    }
    let _ = ctx.set_global_composite_operation("source-over");
}
