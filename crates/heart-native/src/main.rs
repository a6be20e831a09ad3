use anyhow::Result;
use glam::Vec2;
use heart_core::{
    heartbeat_phase, CameraState, ParticleField, Viewport, HEART_SCALE, SIM_TIME_STEP,
};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 640;
const PARTICLES: usize = 2000;
const SEED: u64 = 42;
const IDLE_FRAMES: u32 = 300;
const BURST_FRAMES: u32 = 90;
const OUTPUT: &str = "heart.png";

/// CPU stand-in for the web painter: f32 RGB accumulation with the same
/// fade-then-add policy as the gradient pass plus `lighter` compositing.
struct Splatter {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 3]>,
}

impl Splatter {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0.0; 3]; (width * height) as usize],
        }
    }

    /// Blend every pixel 40% toward the page background, leaving trails.
    fn fade(&mut self) {
        const BACKGROUND: [f32; 3] = [45.0, 10.0, 31.0];
        const ALPHA: f32 = 0.4;
        for px in &mut self.pixels {
            for c in 0..3 {
                px[c] += (BACKGROUND[c] - px[c]) * ALPHA;
            }
        }
    }

    fn splat_disc(&mut self, x: f32, y: f32, radius: f32, rgb: [f32; 3]) {
        if self.width == 0 || self.height == 0 {
            return;
        }
        let r = radius.max(0.35);
        let r2 = r * r;
        let x_min = ((x - r).floor() as i32).max(0);
        let x_max = ((x + r).ceil() as i32).min(self.width as i32 - 1);
        let y_min = ((y - r).floor() as i32).max(0);
        let y_max = ((y + r).ceil() as i32).min(self.height as i32 - 1);
        for py in y_min..=y_max {
            for px in x_min..=x_max {
                let dx = px as f32 + 0.5 - x;
                let dy = py as f32 + 0.5 - y;
                if dx * dx + dy * dy > r2 {
                    continue;
                }
                let pixel = &mut self.pixels[(py as u32 * self.width + px as u32) as usize];
                for c in 0..3 {
                    pixel[c] = (pixel[c] + rgb[c]).min(255.0);
                }
            }
        }
    }

    fn into_image(self) -> image::RgbaImage {
        let mut out = image::RgbaImage::new(self.width, self.height);
        for (i, px) in self.pixels.iter().enumerate() {
            let x = i as u32 % self.width;
            let y = i as u32 / self.width;
            out.put_pixel(
                x,
                y,
                image::Rgba([px[0] as u8, px[1] as u8, px[2] as u8, 255]),
            );
        }
        out
    }
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h.rem_euclid(360.0) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match hp as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    [
        (r1 + m) * 255.0,
        (g1 + m) * 255.0,
        (b1 + m) * 255.0,
    ]
}

fn main() -> Result<()> {
    env_logger::init();

    let mut field = ParticleField::new(PARTICLES, HEART_SCALE, SEED);
    let mut camera = CameraState::default();
    let viewport = Viewport::new(WIDTH as f32, HEIGHT as f32);
    let mut splatter = Splatter::new(WIDTH, HEIGHT);

    let colors: Vec<[f32; 3]> = field
        .particles
        .iter()
        .map(|p| hsl_to_rgb(p.hue, 1.0, p.lightness / 100.0))
        .collect();

    let mut sim_time = 0.0_f32;
    for frame in 0..IDLE_FRAMES + BURST_FRAMES {
        if frame == IDLE_FRAMES {
            field.trigger_celebration();
        }
        sim_time += SIM_TIME_STEP;
        let beat = heartbeat_phase(sim_time);

        camera.update(Vec2::ZERO);
        field.advance(beat);

        splatter.fade();
        for (p, rgb) in field.particles.iter().zip(&colors) {
            if let Some(proj) = camera.project(p.position, viewport) {
                splatter.splat_disc(proj.x, proj.y, p.radius * proj.scale, *rgb);
            }
        }
    }

    splatter.into_image().save(OUTPUT)?;
    log::info!(
        "wrote {OUTPUT} ({} idle + {} burst frames, celebrating={})",
        IDLE_FRAMES,
        BURST_FRAMES,
        field.celebrating()
    );
    Ok(())
}
