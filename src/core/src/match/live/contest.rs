use crate::utils::SeededRng;

pub const CONTEST_JITTER: f32 = 3.0;

pub struct Contest;

impl Contest {
    /// Both sides get independent jitter; a tie goes to the defender.
    pub fn resolve(attack: f32, defence: f32, rng: &mut SeededRng) -> bool {
        let attack_roll = attack + rng.jitter(CONTEST_JITTER);
        let defence_roll = defence + rng.jitter(CONTEST_JITTER);

        attack_roll > defence_roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gap_beyond_jitter_is_decisive() {
        let mut rng = SeededRng::new(11);

        for _ in 0..500 {
            assert!(Contest::resolve(18.0, 11.0, &mut rng));
            assert!(!Contest::resolve(4.0, 11.0, &mut rng));
        }
    }

    #[test]
    fn test_even_contest_goes_both_ways() {
        let mut rng = SeededRng::new(12);
        let wins = (0..1000).filter(|_| Contest::resolve(10.0, 10.0, &mut rng)).count();

        assert!(wins > 400 && wins < 600);
    }
}
