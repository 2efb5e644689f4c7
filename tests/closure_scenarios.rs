use ahash::AHashSet;
use friendnet::closure::{
    ClosureConfig, ClosureEngine, GenerationMode, NoProgress, ParallelClosureEngine, RecordProgress,
    SeedPolicy, closure,
};
use friendnet::dictionary::{Dictionary, LoadOptions, TrieLexicon};
use friendnet::edits::is_single_edit;

const WORDS: &str = "
causes
cause
clauses
clause
cases
case
cast
vast
vase
base
bases
basin
casts
caused
cased
pause
paused
pauses
zebra
zebras
quartz
";

fn dictionary() -> Dictionary {
    let (dictionary, report) = Dictionary::load_from_reader(WORDS.as_bytes(), &LoadOptions::default()).unwrap();
    assert_eq!(report.accepted, 21);
    dictionary
}

fn words(list: &[&str]) -> AHashSet<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn test_causes_network() {
    let dict = dictionary();
    let friends = closure("causes", &dict);

    let expected = words(&[
        "cause", "clauses", "clause", "cases", "case", "cast", "vast", "vase", "base", "bases",
        "casts", "caused", "cased", "pause", "paused", "pauses",
    ]);
    assert_eq!(friends, expected);
    assert!(!friends.contains("basin"));
    assert!(!friends.contains("zebra"));
}

#[test]
fn test_trie_walk_finds_the_same_network() {
    let dict = dictionary();
    let trie = TrieLexicon::from(&dict);
    assert_eq!(trie.len(), dict.len());

    let generated = ClosureEngine::new(&dict).run_with_observer("causes", &mut NoProgress);
    let config = ClosureConfig::default().with_generation(GenerationMode::TrieWalk);
    let walked = ClosureEngine::with_config(&trie, config.clone()).run_with_observer("causes", &mut NoProgress);

    assert_eq!(walked.friends, generated.friends);
    assert_eq!(walked.stats.expansions, generated.stats.expansions);
    assert!(walked.stats.candidates < generated.stats.candidates);

    let parallel = ParallelClosureEngine::new(&trie, config.with_threads(4))
        .unwrap()
        .run_with_observer("causes", &mut NoProgress);
    assert_eq!(parallel.friends, generated.friends);
}

#[test]
fn test_every_friend_has_a_friend_in_the_network() {
    let dict = dictionary();
    let config = ClosureConfig::default().with_seed_policy(SeedPolicy::AlwaysInclude);
    let outcome = ClosureEngine::with_config(&dict, config).run_with_observer("causes", &mut NoProgress);

    for word in &outcome.friends {
        if word == "causes" {
            continue;
        }
        assert!(
            outcome.friends.iter().any(|other| is_single_edit(word, other)),
            "{word} is isolated"
        );
    }
}

#[test]
fn test_idempotent() {
    let dict = dictionary();
    let engine = ClosureEngine::new(&dict);
    let first = engine.run_with_observer("causes", &mut NoProgress);
    let second = engine.run_with_observer("causes", &mut NoProgress);
    assert_eq!(first.friends, second.friends);
    assert_eq!(first.stats.expansions, second.stats.expansions);
    assert_eq!(first.stats.candidates, second.stats.candidates);
}

#[test]
fn test_friend_set_only_grows() {
    let dict = dictionary();
    let config = ClosureConfig::default().with_progress_interval(1);
    let mut recorder = RecordProgress::default();
    let outcome = ClosureEngine::with_config(&dict, config).run_with_observer("causes", &mut recorder);

    assert_eq!(recorder.snapshots.len(), outcome.stats.expansions);
    for pair in recorder.snapshots.windows(2) {
        assert!(pair[0].friends <= pair[1].friends);
        assert_eq!(pair[0].expansions + 1, pair[1].expansions);
    }
    assert_eq!(recorder.snapshots.last().map(|p| p.friends), Some(outcome.len()));
}

#[test]
fn test_dequeues_match_friends() {
    let dict = dictionary();
    let outcome = ClosureEngine::new(&dict).run_with_observer("causes", &mut NoProgress);
    // The seed is expanded but not reported.
    assert_eq!(outcome.stats.expansions, outcome.len() + 1);
}

#[test]
fn test_reaching_the_same_network_from_any_member() {
    let dict = dictionary();
    let config = ClosureConfig::default().with_seed_policy(SeedPolicy::AlwaysInclude);
    let from_causes = ClosureEngine::with_config(&dict, config.clone()).run_with_observer("causes", &mut NoProgress);
    let from_vast = ClosureEngine::with_config(&dict, config).run_with_observer("vast", &mut NoProgress);
    assert_eq!(from_causes.friends, from_vast.friends);
}

#[test]
fn test_parallel_agrees_on_larger_network() {
    let dict = dictionary();
    let sequential = ClosureEngine::new(&dict).run_with_observer("causes", &mut NoProgress);
    let parallel = ParallelClosureEngine::new(&dict, ClosureConfig::default().with_threads(4))
        .unwrap()
        .run_with_observer("causes", &mut NoProgress);
    assert_eq!(sequential.friends, parallel.friends);
}

#[test]
fn test_cat_scenario_and_empty_dictionary() {
    let dict = Dictionary::from_words(["cat", "bat", "bad", "cot"]);
    assert_eq!(closure("cat", &dict), words(&["bat", "cot", "bad"]));
    assert!(closure("anything", &Dictionary::new()).is_empty());
}
