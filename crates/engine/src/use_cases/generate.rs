//! Game generation use case.
//!
//! Binds the domain's game generator to the `NumberSampler` and adds the
//! catalog lookup and logging the CLI needs. Each call owns its own state;
//! calls from several threads share only the stateless entropy port.

use std::sync::Arc;

use sorzi_domain::{
    generate_game, generate_games, Game, GameBatch, GenerationError, Lottery, LotteryKey,
    LotteryRules,
};

use super::sampler::NumberSampler;

/// A batch request against a catalog lottery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub lottery: LotteryKey,
    pub games_count: usize,
    /// `None` uses the lottery's minimum pick count
    pub pick_count: Option<usize>,
}

/// A generated batch together with the lottery it was drawn for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub lottery: Lottery,
    pub pick_count: usize,
    pub games: GameBatch,
}

pub struct GenerateGames {
    sampler: Arc<NumberSampler>,
}

impl GenerateGames {
    pub fn new(sampler: Arc<NumberSampler>) -> Self {
        Self { sampler }
    }

    /// Generate one game under `rules`.
    pub fn game(&self, rules: &LotteryRules, pick_count: usize) -> Result<Game, GenerationError> {
        let game = generate_game(rules, pick_count, |min, max| self.sampler.sample(min, max))
            .inspect_err(|e| log_failure(e, rules, pick_count))?;
        tracing::debug!(pick_count, game = %game, "Generated game");
        Ok(game)
    }

    /// Generate `games_count` independent games under `rules`.
    pub fn games(
        &self,
        rules: &LotteryRules,
        games_count: usize,
        pick_count: usize,
    ) -> Result<GameBatch, GenerationError> {
        let batch = generate_games(rules, games_count, pick_count, |min, max| {
            self.sampler.sample(min, max)
        })
        .inspect_err(|e| log_failure(e, rules, pick_count))?;
        for (i, game) in batch.iter().enumerate() {
            tracing::debug!(game_number = i + 1, pick_count, game = %game, "Generated game");
        }
        Ok(batch)
    }

    /// Resolve the request against the catalog and generate the batch.
    pub fn execute(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, GenerationError> {
        let lottery = Lottery::get(request.lottery);
        let pick_count = request.pick_count.unwrap_or_else(|| lottery.default_picks());

        tracing::info!(
            lottery = %lottery.key,
            games_count = request.games_count,
            pick_count,
            "Generating games"
        );

        let games = self.games(&lottery.rules, request.games_count, pick_count)?;

        Ok(GenerationOutcome {
            lottery,
            pick_count,
            games,
        })
    }
}

fn log_failure(err: &GenerationError, rules: &LotteryRules, pick_count: usize) {
    if err.is_validation() {
        tracing::warn!(
            error = %err,
            range = %rules.range,
            pick_count,
            "Rejected generation request"
        );
    } else {
        tracing::error!(error = %err, "Generation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::entropy::{FixedEntropy, OsEntropy};
    use crate::infrastructure::ports::MockEntropyPort;
    use std::collections::HashSet;
    use std::io;
    use std::sync::Mutex;
    use tracing_subscriber::fmt::MakeWriter;

    /// Log sink shared between a test and its subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn os_use_case() -> GenerateGames {
        GenerateGames::new(Arc::new(NumberSampler::new(Arc::new(OsEntropy::new()))))
    }

    fn mega_sena() -> LotteryRules {
        Lottery::get(LotteryKey::MegaSena).rules
    }

    fn assert_valid(game: &Game, rules: &LotteryRules, pick_count: usize) {
        assert_eq!(game.len(), pick_count);
        assert!(game.numbers().iter().all(|&n| rules.range.contains(n)));
        if rules.unique_numbers {
            let distinct: HashSet<_> = game.numbers().iter().collect();
            assert_eq!(distinct.len(), pick_count, "duplicates in {}", game);
        }
        if rules.sort_ascending {
            assert!(
                game.numbers().windows(2).all(|w| w[0] <= w[1]),
                "unsorted {}",
                game
            );
        }
    }

    #[test]
    fn mega_sena_six_numbers() {
        let use_case = os_use_case();
        let rules = mega_sena();
        for _ in 0..200 {
            let game = use_case.game(&rules, 6).unwrap();
            assert_valid(&game, &rules, 6);
            assert!(game.numbers().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn lotomania_fifty_of_hundred() {
        let use_case = os_use_case();
        let rules = Lottery::get(LotteryKey::Lotomania).rules;
        let game = use_case.game(&rules, 50).unwrap();
        assert_valid(&game, &rules, 50);
        assert!(game.numbers().iter().all(|&n| (0..=99).contains(&n)));
    }

    #[test]
    fn full_range_unique_pick_is_a_permutation() {
        let use_case = os_use_case();
        let rules = LotteryRules::new(1, 25, 1, 25, true, true).unwrap();
        let game = use_case.game(&rules, 25).unwrap();
        assert_eq!(game.numbers(), (1..=25).collect::<Vec<_>>().as_slice());

        let unsorted = LotteryRules::new(1, 25, 1, 25, true, false).unwrap();
        let game = use_case.game(&unsorted, 25).unwrap();
        let mut numbers = game.into_numbers();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=25).collect::<Vec<_>>());
    }

    #[test]
    fn every_catalog_lottery_generates_at_its_bounds() {
        let use_case = os_use_case();
        for lottery in Lottery::catalog() {
            let bounds = lottery.rules.picks_allowed;
            for picks in [bounds.min, bounds.max] {
                let game = use_case.game(&lottery.rules, picks).unwrap();
                assert_valid(&game, &lottery.rules, picks);
            }
        }
    }

    #[test]
    fn batch_of_three_mega_sena_games() {
        let use_case = os_use_case();
        let rules = mega_sena();
        let batch = use_case.games(&rules, 3, 6).unwrap();
        assert_eq!(batch.len(), 3);
        for game in &batch {
            assert_valid(game, &rules, 6);
        }
    }

    #[test]
    fn pick_count_above_maximum_fails() {
        let mut entropy = MockEntropyPort::new();
        entropy.expect_next_word().never();
        let use_case = GenerateGames::new(Arc::new(NumberSampler::new(Arc::new(entropy))));
        let rules = mega_sena();
        assert_eq!(
            use_case.game(&rules, rules.picks_allowed.max + 1),
            Err(GenerationError::PickCountOutOfRange {
                requested: 21,
                min: 6,
                max: 20
            })
        );
    }

    #[test]
    fn impossible_uniqueness_fails() {
        let use_case = os_use_case();
        let rules = LotteryRules::new(1, 5, 1, 10, true, true).unwrap();
        assert!(matches!(
            use_case.game(&rules, 6),
            Err(GenerationError::InsufficientRange { .. })
        ));
    }

    #[test]
    fn batch_reports_first_error_without_games() {
        let use_case = os_use_case();
        assert!(matches!(
            use_case.games(&mega_sena(), 0, 6),
            Err(GenerationError::InvalidGamesCount(_))
        ));
    }

    #[test]
    fn deterministic_words_produce_expected_game() {
        // words map to 1 + (w % 60): 5, 5 (dup), 1, 60, 2, 3, 4
        let entropy = Arc::new(FixedEntropy::new(vec![4, 64, 0, 59, 61, 122, 183]));
        let use_case = GenerateGames::new(Arc::new(NumberSampler::new(entropy.clone())));
        let game = use_case.game(&mega_sena(), 6).unwrap();
        assert_eq!(game.numbers(), &[1, 2, 3, 4, 5, 60]);
        assert_eq!(entropy.draws(), 7);
    }

    #[test]
    fn execute_defaults_to_lottery_minimum() {
        let use_case = os_use_case();
        let outcome = use_case
            .execute(&GenerationRequest {
                lottery: LotteryKey::Lotofacil,
                games_count: 2,
                pick_count: None,
            })
            .unwrap();
        assert_eq!(outcome.lottery.key, LotteryKey::Lotofacil);
        assert_eq!(outcome.pick_count, 15);
        assert_eq!(outcome.games.len(), 2);
        assert!(outcome.games.iter().all(|g| g.len() == 15));
    }

    #[test]
    fn execute_honors_explicit_pick_count() {
        let use_case = os_use_case();
        let outcome = use_case
            .execute(&GenerationRequest {
                lottery: LotteryKey::Quina,
                games_count: 1,
                pick_count: Some(10),
            })
            .unwrap();
        assert_eq!(outcome.pick_count, 10);
        assert_eq!(outcome.games.games()[0].len(), 10);
    }

    #[test]
    fn concurrent_batches_share_only_the_entropy_port() {
        let use_case = Arc::new(os_use_case());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let use_case = use_case.clone();
                std::thread::spawn(move || use_case.games(&mega_sena(), 10, 6))
            })
            .collect();
        for handle in handles {
            let batch = handle.join().unwrap().unwrap();
            assert_eq!(batch.len(), 10);
        }
    }

    #[test]
    fn batch_logs_one_debug_event_per_game() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(logs.clone())
            .finish();

        let outcome = tracing::subscriber::with_default(subscriber, || {
            os_use_case().execute(&GenerationRequest {
                lottery: LotteryKey::MegaSena,
                games_count: 3,
                pick_count: None,
            })
        })
        .unwrap();

        let text = logs.text();
        assert_eq!(outcome.games.len(), 3);
        assert_eq!(text.matches("Generating games").count(), 1);
        assert_eq!(text.matches("Generated game").count(), 3);
        assert!(text.contains("game_number=3"));
    }
}
