use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One row of the player listing: where a player stands and what they
/// have riding on the next settlement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatus {
    pub player_index: PlayerIndex,
    pub reputation: Reputation,
    pub cumulative_profit: Score,
    pub pending: Option<Amount>,
}

impl Table {
    /// Every player in the ledger, in index order.
    pub fn roster(&self) -> Vec<PlayerStatus> {
        self.ledger
            .iter()
            .map(|(player, standing)| PlayerStatus {
                player_index: *player,
                reputation: standing.reputation(),
                cumulative_profit: standing.cumulative_profit(),
                pending: self.queue.get(*player).map(|a| a.amount()),
            })
            .collect()
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "P{} rep {:.2} pnl {:+.2}",
            self.player_index, self.reputation, self.cumulative_profit
        )?;
        match self.pending {
            Some(amount) => write!(f, " pending {}", amount),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn lists_ledger_with_pending_bets() {
        let rules = Rules::default();
        let mut table = Table::new(&rules);
        table.queue.propose(4, 10, &mut table.ledger, &rules).unwrap();
        table.queue.propose(1, 30, &mut table.ledger, &rules).unwrap();
        table.queue.drain_all();
        table.queue.propose(2, 5, &mut table.ledger, &rules).unwrap();
        let roster = table.roster();
        let players = roster.iter().map(|s| s.player_index).collect::<Vec<_>>();
        assert_eq!(players, vec![1, 2, 4]);
        assert_eq!(roster[0].pending, None);
        assert_eq!(roster[1].pending, Some(5));
        assert_eq!(roster[2].reputation, REPUTATION_DEFAULT);
    }
    #[test]
    fn supporters_are_not_listed() {
        let rules = Rules::default();
        let mut table = Table::new(&rules);
        table.queue.propose(0, 10, &mut table.ledger, &rules).unwrap();
        table.queue.support(9, 0, table.ledger.peek(9).contribution()).unwrap();
        assert_eq!(table.roster().len(), 1);
    }
}
