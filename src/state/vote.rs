//! Tri-state voting shared by posts and comments.

use std::future::Future;

/// Which arrow was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoteDirection {
    Up,
    Down,
}

impl From<bool> for VoteDirection {
    /// `true` is an upvote.
    fn from(up: bool) -> Self {
        if up {
            VoteDirection::Up
        } else {
            VoteDirection::Down
        }
    }
}

impl VoteDirection {
    pub fn score(self) -> i8 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

/// The vote to send when `direction` is pressed while `current` is active.
///
/// Pressing the active direction again clears the vote.
pub fn target_vote(current: i8, direction: VoteDirection) -> i8 {
    if current == direction.score() {
        0
    } else {
        direction.score()
    }
}

/// Score counters plus the current account's vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteTally {
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
    /// -1, 0 or 1.
    pub my_vote: i8,
}

/// Anything that carries a [`VoteTally`].
pub trait Votable {
    fn vote_tally(&self) -> VoteTally;

    /// Overwrite the local counters with authoritative ones.
    fn apply_tally(&mut self, tally: VoteTally);

    fn likes(&self) -> i8 {
        self.vote_tally().my_vote
    }
}

/// Vote on `entity`, committing only after the server answers.
///
/// `send` receives the target score and returns the server's updated entity.
/// On failure `entity` is left untouched. Concurrent votes on the same entity
/// are not sequenced: whichever response is applied last wins.
pub async fn vote<V, R, E, F, Fut>(entity: &mut V, direction: VoteDirection, send: F) -> Result<R, E>
where
    V: Votable,
    R: Votable,
    F: FnOnce(i8) -> Fut,
    Fut: Future<Output = Result<R, E>>,
{
    let target = target_vote(entity.likes(), direction);
    let updated = send(target).await?;
    entity.apply_tally(updated.vote_tally());
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default)]
    struct Item {
        tally: VoteTally,
    }

    impl Votable for Item {
        fn vote_tally(&self) -> VoteTally {
            self.tally
        }

        fn apply_tally(&mut self, tally: VoteTally) {
            self.tally = tally;
        }
    }

    /// A server that records the vote and echoes a consistent tally.
    fn server(base: i64) -> impl Fn(i8) -> std::future::Ready<Result<Item, ()>> {
        move |score| {
            std::future::ready(Ok(Item {
                tally: VoteTally {
                    score: base + i64::from(score),
                    upvotes: i64::from(score == 1),
                    downvotes: i64::from(score == -1),
                    my_vote: score,
                },
            }))
        }
    }

    #[test]
    fn test_target_vote() {
        for current in [-1, 0, 1] {
            let up = target_vote(current, VoteDirection::Up);
            let down = target_vote(current, VoteDirection::Down);
            assert_eq!(up, if current == 1 { 0 } else { 1 });
            assert_eq!(down, if current == -1 { 0 } else { -1 });
        }
    }

    #[test]
    fn test_double_press_unvotes() {
        for direction in [VoteDirection::Up, VoteDirection::Down] {
            let mut item = Item::default();
            tokio_test::block_on(async {
                vote(&mut item, direction, server(5)).await.unwrap();
                assert_eq!(item.likes(), direction.score());
                vote(&mut item, direction, server(5)).await.unwrap();
            });
            assert_eq!(item.likes(), 0);
            assert_eq!(item.tally.score, 5);
        }
    }

    #[test]
    fn test_switching_direction() {
        let mut item = Item::default();
        tokio_test::block_on(async {
            vote(&mut item, VoteDirection::Up, server(0)).await.unwrap();
            vote(&mut item, VoteDirection::Down, server(0)).await.unwrap();
        });
        assert_eq!(item.likes(), -1);
        assert_eq!(item.tally.downvotes, 1);
    }

    #[test]
    fn test_failure_leaves_state() {
        let mut item = Item {
            tally: VoteTally {
                score: 3,
                upvotes: 3,
                downvotes: 0,
                my_vote: 1,
            },
        };
        let sent = std::cell::Cell::new(None);
        let result = tokio_test::block_on(vote(&mut item, true.into(), |score| {
            sent.set(Some(score));
            std::future::ready(Err::<Item, _>("offline"))
        }));
        assert_eq!(result.unwrap_err(), "offline");
        assert_eq!(sent.get(), Some(0));
        assert_eq!(item.tally.score, 3);
        assert_eq!(item.likes(), 1);
    }
}
