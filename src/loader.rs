//! Lexicon loading and tree planting.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::domain::{Lexicon, SearchTree};
use crate::errors::{LexiconError, LexiconResult};

/// Read and parse a lexicon file.
#[instrument(level = "debug")]
pub fn load_lexicon(path: &Path) -> LexiconResult<Lexicon> {
    if !path.exists() {
        return Err(LexiconError::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let lexicon = Lexicon::parse(&content, path.to_path_buf())?;
    debug!(
        words = lexicon.len(),
        duplicates = lexicon.duplicate_count(),
        "lexicon parsed"
    );
    Ok(lexicon)
}

/// Shuffle the word list with the given generator and insert every word.
///
/// The permutation decides the resulting tree shape; membership is identical
/// for every insertion order.
pub fn plant_tree_with<R: Rng>(lexicon: &Lexicon, rng: &mut R) -> SearchTree<String> {
    let mut words = lexicon.words.clone();
    words.shuffle(rng);

    let mut tree = SearchTree::new();
    for word in words {
        tree.insert(word);
    }
    tree
}

/// Build the search tree, seeded for a reproducible shape when requested.
#[instrument(level = "debug", skip(lexicon))]
pub fn plant_tree(lexicon: &Lexicon, seed: Option<u64>) -> SearchTree<String> {
    let tree = match seed {
        Some(seed) => plant_tree_with(lexicon, &mut StdRng::seed_from_u64(seed)),
        None => plant_tree_with(lexicon, &mut rand::rng()),
    };
    info!(nodes = tree.len(), depth = tree.depth(), "search tree planted");
    tree
}
