use rand::Rng;
use crate::simulation_engine::models::Door;

/// The doors still in play during one trial.
///
/// Selection is destructive: every pick swap-removes a door, so the pool
/// shrinks and the order of the remaining doors is not meaningful.
#[derive(Debug, Clone)]
pub struct DoorPool {
    doors: Vec<Door>,
}

impl DoorPool {
    /// `count` fresh doors, none holding a prize.
    pub fn generate(count: usize) -> Self {
        DoorPool { doors: vec![Door::default(); count] }
    }

    /// Put a prize behind `count_prize` distinct doors chosen uniformly at random.
    ///
    /// Panics if the pool holds fewer than `count_prize` doors.
    pub fn place_prizes<R: Rng>(&mut self, rng: &mut R, count_prize: usize) {
        assert!(
            count_prize <= self.doors.len(),
            "cannot place {count_prize} prizes behind {} doors",
            self.doors.len()
        );
        for idx in rand::seq::index::sample(rng, self.doors.len(), count_prize) {
            self.doors[idx].place_prize();
        }
    }

    /// Remove and return one uniformly random door; panics on an empty pool.
    pub fn pick_door<R: Rng>(&mut self, rng: &mut R) -> Door {
        assert!(!self.doors.is_empty(), "Door pool exhausted");
        let idx = rng.gen_range(0..self.doors.len());
        self.doors.swap_remove(idx)
    }

    /// The doors the host leaves closed: every remaining prize door, topped
    /// up with random empty doors until `closed_count` doors are kept.
    ///
    /// Consumes the pool. Panics if there are more prize doors than
    /// `closed_count` or too few empty doors to fill the gap.
    pub fn into_closed_doors<R: Rng>(self, rng: &mut R, closed_count: usize) -> DoorPool {
        let (mut closed, mut empty): (Vec<Door>, Vec<Door>) =
            self.doors.into_iter().partition(|d| d.has_prize);
        assert!(
            closed.len() <= closed_count,
            "{} prize doors cannot stay behind {closed_count} closed doors",
            closed.len()
        );
        let missing = closed_count - closed.len();
        assert!(
            missing <= empty.len(),
            "need {missing} empty doors to close, only {} left",
            empty.len()
        );
        for _ in 0..missing {
            let idx = rng.gen_range(0..empty.len());
            closed.push(empty.swap_remove(idx));
        }
        DoorPool { doors: closed }
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    pub fn prize_count(&self) -> usize {
        self.doors.iter().filter(|d| d.has_prize).count()
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }
}

/// Fresh pool with `count_prize` prizes already placed.
pub fn setup_pool<R: Rng>(rng: &mut R, count_door: usize, count_prize: usize) -> DoorPool {
    let mut pool = DoorPool::generate(count_door);
    pool.place_prizes(rng, count_prize);
    pool
}
