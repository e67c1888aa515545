use crate::{
    composition::content::{Paint, TextRole},
    eval::evaluator::{FrameDescription, VisualNode},
    foundation::math::Fnv1a64,
    style::{color::Color, variant::NamedVariant},
};

/// 128-bit content hash of a frame description.
///
/// The frame index is not hashed, so visually identical frames share a
/// fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameFingerprint {
    /// High half.
    pub hi: u64,
    /// Low half.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint every node of `frame`, in order.
pub fn fingerprint_frame(frame: &FrameDescription) -> FrameFingerprint {
    let mut h = PairHasher::new();
    h.u64(frame.nodes.len() as u64);
    for node in &frame.nodes {
        write_node(&mut h, node);
    }
    h.finish()
}

fn write_node(h: &mut PairHasher, node: &VisualNode) {
    h.str(&node.scene_id);
    match node.slot {
        Some(s) => {
            h.u8(1);
            h.u64(s as u64);
        }
        None => h.u8(0),
    }
    h.u64(i64::from(node.z) as u64);
    for v in [node.rect.x0, node.rect.y0, node.rect.x1, node.rect.y1] {
        h.f64(v);
    }
    h.f64(node.opacity);
    for c in node.transform.as_coeffs() {
        h.f64(c);
    }
    h.f64(node.blur_px);

    match &node.paint {
        Paint::Fill {
            color,
            corner_radius,
        } => {
            h.u8(0);
            h.color(*color);
            h.f64(*corner_radius);
        }
        Paint::Border {
            color,
            width,
            corner_radius,
        } => {
            h.u8(1);
            h.color(*color);
            h.f64(*width);
            h.f64(*corner_radius);
        }
        Paint::Text {
            text,
            role,
            size_px,
            weight,
            color,
        } => {
            h.u8(2);
            h.str(text);
            h.u8(match role {
                TextRole::Title => 0,
                TextRole::Subtitle => 1,
                TextRole::Body => 2,
                TextRole::Label => 3,
                TextRole::CodeTitle => 4,
            });
            h.f64(*size_px);
            h.u64(u64::from(*weight));
            h.color(*color);
        }
        Paint::Code {
            text,
            language,
            show_line_numbers,
            cursor,
            cursor_color,
        } => {
            h.u8(3);
            h.str(text);
            h.str(language);
            h.u8(u8::from(*show_line_numbers));
            match cursor {
                Some(c) => {
                    h.u8(1);
                    h.str(c.name());
                }
                None => h.u8(0),
            }
            h.color(*cursor_color);
        }
    }
}

// Two FNV-1a streams with different offset bases.
struct PairHasher {
    a: Fnv1a64,
    b: Fnv1a64,
}

impl PairHasher {
    fn new() -> Self {
        Self {
            a: Fnv1a64::new_default(),
            b: Fnv1a64::new(0x9ae1_6a3b_2f90_404f),
        }
    }

    fn u8(&mut self, v: u8) {
        self.a.write_u8(v);
        self.b.write_u8(v);
    }

    fn u64(&mut self, v: u64) {
        self.a.write_u64(v);
        self.b.write_u64(v);
    }

    fn f64(&mut self, v: f64) {
        self.a.write_f64(v);
        self.b.write_f64(v);
    }

    fn str(&mut self, s: &str) {
        self.a.write_str(s);
        self.b.write_str(s);
    }

    fn color(&mut self, c: Color) {
        let bytes = [c.r, c.g, c.b, c.a];
        self.a.write_bytes(&bytes);
        self.b.write_bytes(&bytes);
    }

    fn finish(self) -> FrameFingerprint {
        FrameFingerprint {
            hi: self.a.finish(),
            lo: self.b.finish(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
