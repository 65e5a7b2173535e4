use xxhash_rust::xxh3::Xxh3;

use crate::{
    eval::apply::FrameState,
    foundation::core::{Property, Unit, Value},
};

const XXH3_SEED: u64 = 0x5c7a_91e3_0d24_b6f8;

/// Stable fingerprint of a [`FrameState`], used to skip redundant style writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StateFingerprint {
    pub hi: u64,
    pub lo: u64,
}

/// Compute a stable fingerprint for an evaluated state.
///
/// Floats are hashed by bit pattern, so `0.0` and `-0.0` differ.
pub fn fingerprint_state(state: &FrameState) -> StateFingerprint {
    let mut h = StableHasher::new();
    h.write_u32(state.len() as u32);
    for (target, props) in state.iter() {
        h.write_str(target.as_str());
        h.write_u32(props.len() as u32);
        for (property, value) in props {
            write_property(&mut h, property);
            write_value(&mut h, value);
        }
    }
    h.finish()
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_u32(&mut self, v: u32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.write_u64(v.to_bits());
    }

    fn write_str(&mut self, s: &str) {
        self.write_u32(s.len() as u32);
        self.write_bytes(s.as_bytes());
    }

    fn finish(self) -> StateFingerprint {
        let v = self.inner.digest128();
        StateFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

fn write_property(h: &mut StableHasher, p: &Property) {
    h.write_str(p.name());
}

fn write_value(h: &mut StableHasher, v: &Value) {
    match v {
        Value::Number(n) => {
            h.write_u8(0);
            h.write_f64(*n);
        }
        Value::Length { amount, unit } => {
            h.write_u8(1);
            h.write_f64(*amount);
            h.write_u8(match unit {
                Unit::Px => 0,
                Unit::Percent => 1,
                Unit::Deg => 2,
            });
        }
        Value::Vec2(p) => {
            h.write_u8(2);
            h.write_f64(p.x);
            h.write_f64(p.y);
        }
        Value::Keyword(k) => {
            h.write_u8(3);
            h.write_str(k);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/fingerprint.rs"]
mod tests;
