pub const ORGANELLE_SALT: u32 = 0x0A6E_11E5;
pub const TARGET_SALT: u32 = 0x7A26_E715;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn shuffled_order(len: usize, seed: u32, salt: u32) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let base = splitmix32(seed ^ salt);
    for i in (1..order.len()).rev() {
        let j = (rand_unit(base, i as u32) * (i as f32 + 1.0)) as usize;
        order.swap(i, j.min(i));
    }
    order
}

pub fn next_round_seed(previous: u32, now_ms: u32) -> u32 {
    splitmix32(now_ms ^ previous.wrapping_add(0x9E37_79B9))
}
