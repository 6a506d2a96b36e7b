/// Mulberry32: a small deterministic PRNG over 32-bit state.
///
/// The same seed yields the same sequence on every platform because the
/// generator only uses wrapping u32 arithmetic and logical right shifts;
/// the final division by 2^32 is exact in f64.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next value in [0, 1).
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Next value in [0, 1) as f32, for drawing-coordinate math.
    pub fn next_f32(&mut self) -> f32 {
        self.next() as f32
    }
}
