//! Peg state store
//!
//! [`Pegs`] is the single source of truth for the three pegs' contents and
//! the running move counter. Each peg is a `Vec<Disk>` with the bottom disk
//! first, so the top of the peg is the last element.

use super::{total_moves, Disk, PegId, MAX_STORE_DISKS, MIN_DISKS};
use crate::errors::HanoiError;
use rustc_hash::FxHashSet;

/// The three pegs plus move accounting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pegs {
    towers: [Vec<Disk>; 3],
    disk_count: u8,
    move_count: u64,
    total_moves: u64,
}

impl Pegs {
    /// Create pegs holding `n` disks on the source peg
    pub fn new(n: u8) -> Result<Self, HanoiError> {
        let mut pegs = Pegs {
            towers: [Vec::new(), Vec::new(), Vec::new()],
            disk_count: 0,
            move_count: 0,
            total_moves: 0,
        };
        pegs.initialize(n)?;
        Ok(pegs)
    }

    /// Reset to `n` disks stacked on the source peg, others empty
    pub fn initialize(&mut self, n: u8) -> Result<(), HanoiError> {
        if !(MIN_DISKS..=MAX_STORE_DISKS).contains(&n) {
            return Err(HanoiError::DiskCountOutOfRange {
                count: n,
                min: MIN_DISKS,
                max: MAX_STORE_DISKS,
            });
        }

        for tower in &mut self.towers {
            tower.clear();
        }
        self.towers[PegId::Source.index()].extend((1..=n).rev());
        self.disk_count = n;
        self.move_count = 0;
        self.total_moves = total_moves(n);
        Ok(())
    }

    /// Take the top disk of `from` and put it on `to`, returning the disk moved
    ///
    /// Both failure cases are logic bugs in the caller: the recursive solver
    /// never moves from an empty peg or onto a smaller disk.
    pub fn apply_move(&mut self, from: PegId, to: PegId) -> Result<Disk, HanoiError> {
        let disk = match self.top(from) {
            Some(disk) => disk,
            None => {
                debug_assert!(false, "move from empty peg {from}");
                return Err(HanoiError::EmptyPeg { peg: from });
            }
        };

        if let Some(top) = self.top(to) {
            if top < disk {
                debug_assert!(false, "disk {disk} placed on smaller disk {top} at {to}");
                return Err(HanoiError::IllegalPlacement { disk, top, peg: to });
            }
        }

        self.towers[from.index()].pop();
        self.towers[to.index()].push(disk);
        self.move_count += 1;
        Ok(disk)
    }

    /// Disks on a peg, bottom first
    pub fn peg(&self, peg: PegId) -> &[Disk] {
        &self.towers[peg.index()]
    }

    /// The smallest disk on a peg, if any
    pub fn top(&self, peg: PegId) -> Option<Disk> {
        self.towers[peg.index()].last().copied()
    }

    pub fn disk_count(&self) -> u8 {
        self.disk_count
    }

    pub fn move_count(&self) -> u64 {
        self.move_count
    }

    /// Expected moves for a full solve: `2^n - 1`
    pub fn total_moves(&self) -> u64 {
        self.total_moves
    }

    /// Whether every disk sits on the destination peg
    pub fn is_solved(&self) -> bool {
        self.towers[PegId::Destination.index()].len() == usize::from(self.disk_count)
    }

    /// Verify ordering on each peg and that every disk appears exactly once
    pub fn check_invariants(&self) -> Result<(), String> {
        let mut seen = FxHashSet::default();

        for peg in PegId::ALL {
            let disks = self.peg(peg);
            if let Some(pair) = disks.windows(2).find(|pair| pair[0] <= pair[1]) {
                return Err(format!(
                    "{} is not strictly decreasing: {} below {}",
                    peg, pair[0], pair[1]
                ));
            }
            for &disk in disks {
                if disk == 0 || disk > self.disk_count {
                    return Err(format!("{} holds unknown disk {}", peg, disk));
                }
                if !seen.insert(disk) {
                    return Err(format!("Disk {} appears more than once", disk));
                }
            }
        }

        if seen.len() != usize::from(self.disk_count) {
            return Err(format!(
                "Expected {} disks, found {}",
                self.disk_count,
                seen.len()
            ));
        }
        Ok(())
    }
}
