//! Monte-Carlo sampling agent.
//!
//! ## Decision procedure
//!
//! With a visible card in hand the agent:
//!
//! 1. picks candidate slots (opening table, forced apex on its last play,
//!    otherwise every legal slot),
//! 2. samples `iterations` completions of its empty slots from the cards it
//!    has not seen,
//! 3. in each completion finds the candidate where the visible card scores
//!    best and votes for it; the most-voted candidate is the target,
//! 4. if draws remain, simulates `draw_iterations` random future draws per
//!    completion and redraws when more than half of the completions favor
//!    drawing over playing at the target.
//!
//! Every random choice comes from the agent's own seeded stream, so a game
//! replays exactly given the same shuffle and agent seeds.

use smallvec::SmallVec;

use crate::cards::{Card, DECK_SIZE};
use crate::core::{GameRng, PlayerId, SamplingConfig, ORIENTATION_COUNT};
use crate::error::ConfigError;
use crate::rules::{tentative_score_slots, Slots, SLOT_COUNT};

use super::openings::{opening_slots, SlotList};
use super::{Agent, Move, TableView};

/// Summary of the agent's most recent sampled decision.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    /// Slots that were considered, in tally order.
    pub candidates: SlotList,
    /// Completions won by each candidate.
    pub votes: SmallVec<[usize; SLOT_COUNT]>,
    /// Slot the visible card goes to if the agent plays.
    pub target: usize,
    /// Completions where drawing beat playing. `None` when no draws were
    /// left to weigh.
    pub draw_votes: Option<usize>,
    /// The move that was emitted.
    pub chosen: Move,
}

/// Sampling agent.
#[derive(Clone, Debug)]
pub struct SampleAgent {
    view: TableView,
    rng: GameRng,
    config: SamplingConfig,
    orientation: u8,
    /// Cards known to be out of the unseen pool, by card index.
    seen: [bool; DECK_SIZE],
    last_decision: Option<Decision>,
}

impl SampleAgent {
    /// Create an agent with its own stream seeded from `seed`.
    ///
    /// The opening orientation comes from `config` when set, otherwise from
    /// the agent's stream.
    pub fn new(player: PlayerId, seed: u64, config: SamplingConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = GameRng::new(seed);
        let orientation = config
            .orientation
            .unwrap_or_else(|| rng.below(ORIENTATION_COUNT as usize) as u8);

        Ok(Self {
            view: TableView::new(player),
            rng,
            config,
            orientation,
            seen: [false; DECK_SIZE],
            last_decision: None,
        })
    }

    #[must_use]
    pub fn orientation(&self) -> u8 {
        self.orientation
    }

    #[must_use]
    pub fn view(&self) -> &TableView {
        &self.view
    }

    #[must_use]
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Whether `card` is known to be out of the unseen pool.
    #[must_use]
    pub fn has_seen(&self, card: Card) -> bool {
        self.seen[card.index()]
    }

    /// Number of cards in the seen-set.
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen.iter().filter(|&&s| s).count()
    }

    #[must_use]
    pub fn last_decision(&self) -> Option<&Decision> {
        self.last_decision.as_ref()
    }

    /// Slots the visible card may go to on this decision.
    #[must_use]
    pub fn candidate_slots(&self) -> SlotList {
        let own = self.view.own();
        let played = self.view.cards_played();

        if let Some(slots) = opening_slots(self.orientation, played, own) {
            return slots;
        }
        if played == SLOT_COUNT - 1 {
            return SmallVec::from_slice(&[SLOT_COUNT - 1]);
        }
        own.placeable_slots().collect()
    }

    /// Sampled decision with explicit effort parameters.
    pub fn generate_move_with(&mut self, iterations: usize, draw_iterations: usize) -> Move {
        let Some(visible) = self.view.visible() else {
            self.last_decision = None;
            return self.view.record_draw();
        };

        let candidates = self.candidate_slots();
        assert!(!candidates.is_empty(), "no candidate slot for {visible}");

        let base = *self.view.own().cards();
        let empty: SlotList = self.view.own().empty_slots().collect();
        let completions: Vec<Slots> = (0..iterations)
            .map(|_| self.sample_completion(&base, &empty))
            .collect();

        let slot_scores: Vec<SmallVec<[i32; SLOT_COUNT]>> = completions
            .iter()
            .map(|completion| {
                candidates
                    .iter()
                    .map(|&slot| tentative_score_slots(completion, visible, slot))
                    .collect()
            })
            .collect();

        let mut votes: SmallVec<[usize; SLOT_COUNT]> = SmallVec::from_elem(0, candidates.len());
        for scores in &slot_scores {
            votes[first_max(scores)] += 1;
        }
        let best = first_max(&votes);
        let target = candidates[best];

        if self.view.draws_remaining() == 0 {
            log::trace!("{} must play {visible} at {target} (votes {votes:?})", self.view.player());
            return self.finish(candidates, votes, target, None, Move::PlayAt(target));
        }

        let mut draw_votes = 0;
        for (completion, scores) in completions.iter().zip(&slot_scores) {
            let mut drawn = 0;
            for _ in 0..draw_iterations {
                let slot = candidates[self.rng.below(candidates.len())];
                // May pick a card already placed in this completion.
                if let Some(index) = self.random_unseen_index() {
                    drawn += tentative_score_slots(completion, Card::from_index(index), slot);
                }
            }
            if drawn > scores[best] * draw_iterations as i32 {
                draw_votes += 1;
            }
        }

        let chosen = if draw_votes > iterations / 2 {
            Move::Draw
        } else {
            Move::PlayAt(target)
        };
        log::trace!(
            "{} holding {visible}: votes {votes:?} over {candidates:?}, {draw_votes}/{iterations} favor drawing -> {chosen:?}",
            self.view.player()
        );
        self.finish(candidates, votes, target, Some(draw_votes), chosen)
    }

    fn finish(
        &mut self,
        candidates: SlotList,
        votes: SmallVec<[usize; SLOT_COUNT]>,
        target: usize,
        draw_votes: Option<usize>,
        chosen: Move,
    ) -> Move {
        self.last_decision = Some(Decision {
            candidates,
            votes,
            target,
            draw_votes,
            chosen,
        });
        match chosen {
            Move::Draw => self.view.record_draw(),
            Move::PlayAt(slot) => self.view.record_play(slot),
        }
    }

    /// Fill every empty slot with a distinct unseen card.
    ///
    /// Sampled cards are marked seen only while this completion is built.
    /// A slot stays empty if the unseen pool runs dry.
    fn sample_completion(&mut self, base: &Slots, empty: &[usize]) -> Slots {
        let mut completion = *base;
        let mut marked: SmallVec<[usize; SLOT_COUNT]> = SmallVec::new();

        for &slot in empty {
            let Some(index) = self.random_unseen_index() else {
                log::trace!("unseen pool exhausted, leaving slot {slot} open");
                break;
            };
            self.seen[index] = true;
            marked.push(index);
            completion[slot] = Some(Card::from_index(index));
        }

        for index in marked {
            self.seen[index] = false;
        }
        completion
    }

    /// Probe from a random index to the next unseen card, wrapping once.
    fn random_unseen_index(&mut self) -> Option<usize> {
        let start = self.rng.below(DECK_SIZE);
        (0..DECK_SIZE)
            .map(|step| (start + step) % DECK_SIZE)
            .find(|&index| !self.seen[index])
    }
}

/// Index of the first maximum.
fn first_max<T: Copy + PartialOrd>(values: &[T]) -> usize {
    let mut best = 0;
    for (i, &value) in values.iter().enumerate().skip(1) {
        if value > values[best] {
            best = i;
        }
    }
    best
}

impl Agent for SampleAgent {
    fn name(&self) -> &'static str {
        "sampling"
    }

    fn player(&self) -> PlayerId {
        self.view.player()
    }

    fn generate_move(&mut self) -> Move {
        let (iterations, draw_iterations) = (self.config.iterations, self.config.draw_iterations);
        self.generate_move_with(iterations, draw_iterations)
    }

    fn reveal_card(&mut self, card: Card) {
        self.view.set_visible(Some(card));
        self.seen[card.index()] = true;
    }

    fn accept_opponent_move(&mut self, card: Card, slot: usize) {
        self.view.record_opponent_play(card, slot);
        self.seen[card.index()] = true;
    }

    fn set_visible_card(&mut self, card: Option<Card>) {
        self.view.set_visible(card);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Color;
    use crate::rules::DRAWS_PER_TURN;

    fn agent(orientation: u8) -> SampleAgent {
        let config = SamplingConfig::default()
            .with_iterations(40)
            .with_draw_iterations(8)
            .with_orientation(orientation);
        SampleAgent::new(PlayerId::ONE, 7, config).unwrap()
    }

    #[test]
    fn test_first_max_prefers_earliest() {
        assert_eq!(first_max(&[1, 3, 3, 2]), 1);
        assert_eq!(first_max(&[0, 0, 0]), 0);
        assert_eq!(first_max(&[5]), 0);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = SamplingConfig::default().with_iterations(0);
        assert!(matches!(
            SampleAgent::new(PlayerId::ONE, 1, config),
            Err(ConfigError::ZeroIterations)
        ));
    }

    #[test]
    fn test_orientation_from_stream_is_seeded() {
        let a = SampleAgent::new(PlayerId::ONE, 5, SamplingConfig::default()).unwrap();
        let b = SampleAgent::new(PlayerId::ONE, 5, SamplingConfig::default()).unwrap();
        assert_eq!(a.orientation(), b.orientation());
        assert!(a.orientation() < ORIENTATION_COUNT);
    }

    #[test]
    fn test_draws_without_visible_card() {
        let mut agent = agent(0);
        assert_eq!(agent.generate_move(), Move::Draw);
        assert_eq!(agent.view().draws_remaining(), 1);
        assert!(agent.last_decision().is_none());
    }

    #[test]
    fn test_first_play_uses_opening_table() {
        let mut agent = agent(3);
        agent.reveal_card(Card::new(6, Color::Red, 0));
        assert_eq!(agent.candidate_slots().as_slice(), &[3, 4]);

        agent.generate_move_with(20, 4);
        let decision = agent.last_decision().unwrap();
        assert_eq!(decision.candidates.as_slice(), &[3, 4]);
        assert_eq!(decision.votes.iter().sum::<usize>(), 20);
        assert!([3, 4].contains(&decision.target));
    }

    #[test]
    fn test_plays_when_budget_spent() {
        let mut agent = agent(1);
        agent.set_visible_card(None);
        assert_eq!(agent.generate_move(), Move::Draw);
        assert_eq!(agent.generate_move(), Move::Draw);
        assert_eq!(agent.view().draws_remaining(), 0);

        agent.reveal_card(Card::from_index(25));
        let mv = agent.generate_move();
        assert!(matches!(mv, Move::PlayAt(0) | Move::PlayAt(2)), "{mv:?}");

        let decision = agent.last_decision().unwrap();
        assert_eq!(decision.candidates.as_slice(), &[0, 2]);
        assert_eq!(decision.draw_votes, None);
        assert_eq!(decision.chosen, Move::PlayAt(decision.target));
        assert_eq!(agent.view().draws_remaining(), DRAWS_PER_TURN);
    }

    /// Put `card` into `slot` of the agent's own pyramid and mark it seen.
    fn seat_card(agent: &mut SampleAgent, slot: usize, card: Card) {
        agent.view.set_visible(Some(card));
        agent.view.record_play(slot);
        agent.seen[card.index()] = true;
    }

    fn mark_seen(agent: &mut SampleAgent, indices: std::ops::Range<usize>) {
        for index in indices {
            agent.seen[index] = true;
        }
    }

    /// Nine white cards down, so only the apex is left and every edge
    /// through it pairs two white cards.
    fn white_board_agent() -> SampleAgent {
        let mut agent = agent(5);
        for slot in 0..SLOT_COUNT - 1 {
            seat_card(&mut agent, slot, Card::from_index(slot));
        }
        agent
    }

    #[test]
    fn test_redraws_when_future_cards_beat_the_visible_one() {
        let mut agent = white_board_agent();
        // Only red cards remain unseen; any of them scores at the apex.
        mark_seen(&mut agent, 0..20);
        agent.reveal_card(Card::new(1, Color::White, 1));

        let mv = agent.generate_move_with(20, 5);
        assert_eq!(mv, Move::Draw);

        let decision = agent.last_decision().unwrap();
        assert_eq!(decision.candidates.as_slice(), &[9]);
        assert_eq!(decision.target, 9);
        assert_eq!(decision.draw_votes, Some(20));
        assert!(decision.draw_votes.unwrap() > 20 / 2);
        assert_eq!(agent.view().draws_remaining(), 1);
    }

    #[test]
    fn test_equal_draw_estimate_keeps_the_card() {
        let mut agent = white_board_agent();
        // Only white cards remain unseen: drawing and playing both score 0,
        // and a tie does not count as a vote for drawing.
        mark_seen(&mut agent, 20..DECK_SIZE);
        agent.reveal_card(Card::new(1, Color::White, 1));

        assert_eq!(agent.generate_move_with(20, 5), Move::PlayAt(9));
        assert_eq!(agent.last_decision().unwrap().draw_votes, Some(0));
    }

    #[test]
    fn test_plays_odd_card_where_it_scores_most() {
        let mut agent = agent(5);
        seat_card(&mut agent, 0, Card::new(1, Color::White, 0));
        seat_card(&mut agent, 1, Card::new(2, Color::White, 0));
        // Completions are all white, so the red ten scores 10 per edge it
        // sits on: slots 3 and 5 lie on three edges, and 3 comes first.
        mark_seen(&mut agent, 20..DECK_SIZE);
        agent.reveal_card(Card::new(10, Color::Red, 0));

        let mv = agent.generate_move_with(30, 5);
        assert_eq!(mv, Move::PlayAt(3));

        let decision = agent.last_decision().unwrap();
        assert_eq!(decision.candidates.as_slice(), &[2, 3, 4, 5]);
        assert_eq!(decision.votes.as_slice(), &[0, 30, 0, 0]);
        assert_eq!(decision.target, 3);
        assert_eq!(decision.draw_votes, Some(0));
        assert_eq!(agent.view().own().get(3), Some(Card::new(10, Color::Red, 0)));
    }

    #[test]
    fn test_sampling_leaves_seen_set_unchanged() {
        let mut agent = agent(5);
        agent.reveal_card(Card::from_index(0));
        agent.accept_opponent_move(Card::from_index(30), 2);
        let before = agent.seen;

        agent.reveal_card(Card::from_index(17));
        let expected = {
            let mut s = before;
            s[17] = true;
            s
        };
        agent.generate_move();
        assert_eq!(agent.seen, expected);
        assert_eq!(agent.seen_count(), 3);
    }

    #[test]
    fn test_completion_fills_empty_slots_with_unseen_cards() {
        let mut agent = agent(0);
        for index in [1, 2, 3] {
            agent.reveal_card(Card::from_index(index));
        }
        let base = *agent.view().own().cards();
        let empty: SlotList = (0..SLOT_COUNT).collect();

        let completion = agent.sample_completion(&base, &empty);
        let mut indices: Vec<_> = completion.iter().map(|c| c.unwrap().index()).collect();
        assert!(indices.iter().all(|i| ![1, 2, 3].contains(i)));
        indices.sort_unstable();
        indices.dedup();
        assert_eq!(indices.len(), SLOT_COUNT);
    }

    #[test]
    fn test_exhausted_pool_leaves_slots_open() {
        let mut agent = agent(0);
        for index in 0..DECK_SIZE - 1 {
            agent.seen[index] = true;
        }
        let empty: SlotList = SmallVec::from_slice(&[0, 1]);
        let completion = agent.sample_completion(&[None; SLOT_COUNT], &empty);

        assert_eq!(completion[0], Some(Card::from_index(DECK_SIZE - 1)));
        assert_eq!(completion[1], None);
        assert!(!agent.seen[DECK_SIZE - 1]);
    }

    #[test]
    fn test_last_play_forced_to_apex() {
        let mut agent = agent(0);
        let mut next = 0;
        while agent.view().cards_played() < SLOT_COUNT - 1 {
            agent.reveal_card(Card::from_index(next));
            next += 1;
            agent.generate_move_with(5, 2);
        }
        assert_eq!(agent.candidate_slots().as_slice(), &[9]);
        assert!(agent.view().own().can_place(9));
    }

    #[test]
    fn test_same_seed_same_moves() {
        let run = || {
            let mut agent = agent(2);
            let mut moves = Vec::new();
            for index in [5, 13, 22, 31, 8] {
                agent.reveal_card(Card::from_index(index));
                moves.push(agent.generate_move());
            }
            moves
        };
        assert_eq!(run(), run());
    }
}
