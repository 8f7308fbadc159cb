use crate::rng::Rng;

pub fn shuffle<'a, T>(items: &'a mut [T], rng: &mut Rng) -> &'a mut [T] {
    for i in (1..items.len()).rev() {
        let j = rng.pick_index(i + 1);
        items.swap(i, j);
    }
    items
}

pub fn pick_distinct_indices(count: usize, len: usize, rng: &mut Rng) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    shuffle(&mut indices, rng);
    indices.truncate(count.min(len));
    indices
}
