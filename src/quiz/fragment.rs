use rand::Rng;

/// Pick where a fragment of `fragment_secs` starts inside a track of
/// `duration_secs`.
///
/// Short tracks play from the beginning. Otherwise the offset is uniform over
/// `0..=duration - fragment`, so the fragment always ends inside the track.
pub fn select_start_offset<R: Rng + ?Sized>(
    rng: &mut R,
    duration_secs: u64,
    fragment_secs: u64,
) -> u64 {
    if duration_secs <= fragment_secs {
        return 0;
    }
    rng.random_range(0..=duration_secs - fragment_secs)
}
