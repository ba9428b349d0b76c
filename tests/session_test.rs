//! Transcript tests for the interactive session

use wordtree::session::Session;
use wordtree::SearchTree;

fn tree_of(words: &[&str]) -> SearchTree<String> {
    let mut tree = SearchTree::new();
    for word in words {
        tree.insert(word.to_string());
    }
    tree
}

fn run_session(tree: &mut SearchTree<String>, input: &str) -> String {
    let mut output = Vec::new();
    Session::new(tree)
        .run(input.as_bytes(), &mut output)
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn given_full_query_mix_when_session_runs_then_transcript_matches() {
    // Shape for ["m", "f", "t", "a"]:
    //
    //        m
    //       / \
    //      f   t
    //     /
    //    a
    let mut tree = tree_of(&["m", "f", "t", "a"]);

    let transcript = run_session(&mut tree, "f\nQ\n<f\n<m\n>f\n<zzz\n-t\nt\n>f\n\n");

    assert_eq!(
        transcript,
        "Please enter a word, or hit enter to quit:\n\
         \"f\" is a valid word.\n\
         \"q\" is NOT a valid word.\n\
         The predecessor of \"f\" is \"f\".\n\
         \"m\" has no predecessor.\n\
         The successor of \"f\" is \"t\".\n\
         \"zzz\" is NOT a valid word.\n\
         \"t\" was successfully deleted from the tree.\n\
         \"t\" is NOT a valid word.\n\
         \"f\" has no successor.\n\
         Goodbye!\n"
    );
}

#[test]
fn given_uppercase_queries_when_session_runs_then_lowercase_normalization_applies() {
    let mut tree = tree_of(&["apple", "banana"]);

    let transcript = run_session(&mut tree, "APPLE\n-Banana\nbanana\n\n");

    assert_eq!(
        transcript,
        "Please enter a word, or hit enter to quit:\n\
         \"apple\" is a valid word.\n\
         \"banana\" was successfully deleted from the tree.\n\
         \"banana\" is NOT a valid word.\n\
         Goodbye!\n"
    );
}

#[test]
fn given_deletion_request_for_absent_word_when_session_runs_then_tree_is_untouched() {
    let mut tree = tree_of(&["apple", "banana"]);

    let transcript = run_session(&mut tree, "-pear\n\n");

    assert!(transcript.contains("\"pear\" is NOT a valid word."));
    assert_eq!(tree.len(), 2);
}

#[test]
fn given_input_ending_without_blank_line_when_session_runs_then_still_says_goodbye() {
    let mut tree = tree_of(&["apple"]);

    let transcript = run_session(&mut tree, "apple\n");

    assert!(transcript.ends_with("Goodbye!\n"));
}

#[test]
fn given_empty_tree_when_session_runs_then_everything_is_invalid() {
    let mut tree = SearchTree::new();

    let transcript = run_session(&mut tree, "word\n<word\n\n");

    assert_eq!(
        transcript,
        "Please enter a word, or hit enter to quit:\n\
         \"word\" is NOT a valid word.\n\
         \"word\" is NOT a valid word.\n\
         Goodbye!\n"
    );
}
