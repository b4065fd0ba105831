//! Word valence tables.
//!
//! Keys are lowercase single words. Valences follow the VADER convention:
//! mean emotional intensity on `[-4.0, 4.0]`, positive values for positive
//! words. Coverage is tuned for general news text.

pub(crate) const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("achieve", 1.9),
    ("achievement", 2.4),
    ("amazing", 2.8),
    ("award", 2.5),
    ("awarded", 2.4),
    ("beautiful", 2.9),
    ("benefit", 1.9),
    ("benefits", 1.7),
    ("best", 3.2),
    ("better", 1.9),
    ("boost", 1.7),
    ("boosted", 1.6),
    ("breakthrough", 2.4),
    ("brilliant", 2.8),
    ("celebrate", 2.7),
    ("celebration", 2.7),
    ("charity", 1.8),
    ("delight", 2.9),
    ("delighted", 2.8),
    ("donate", 1.8),
    ("donation", 1.7),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("favourite", 2.0),
    ("free", 1.8),
    ("freedom", 2.3),
    ("fun", 2.3),
    ("generous", 2.3),
    ("good", 1.9),
    ("grateful", 2.6),
    ("gratitude", 2.6),
    ("great", 3.1),
    ("growing", 1.4),
    ("growth", 1.6),
    ("happiness", 2.6),
    ("happy", 2.7),
    ("hero", 2.6),
    ("heroes", 2.5),
    ("honour", 2.2),
    ("honoured", 2.3),
    ("hope", 1.9),
    ("hopeful", 2.3),
    ("hopes", 1.8),
    ("improve", 1.9),
    ("improved", 2.0),
    ("improvement", 2.0),
    ("inspire", 2.2),
    ("inspired", 2.1),
    ("inspiring", 2.5),
    ("joy", 2.9),
    ("kind", 2.0),
    ("kindness", 2.5),
    ("laugh", 2.2),
    ("love", 3.2),
    ("loved", 2.9),
    ("lucky", 2.4),
    ("milestone", 1.5),
    ("optimistic", 2.2),
    ("peace", 2.5),
    ("peaceful", 2.4),
    ("popular", 2.1),
    ("positive", 2.3),
    ("praise", 2.6),
    ("praised", 2.4),
    ("pride", 2.0),
    ("proud", 2.2),
    ("recovered", 1.8),
    ("recovering", 1.5),
    ("recovery", 1.9),
    ("rescue", 1.6),
    ("rescued", 1.8),
    ("reunite", 1.9),
    ("reunited", 2.1),
    ("safe", 1.9),
    ("safer", 1.8),
    ("save", 2.2),
    ("saved", 2.1),
    ("smile", 2.1),
    ("smiles", 2.0),
    ("strong", 2.3),
    ("stronger", 2.2),
    ("succeed", 2.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("support", 1.7),
    ("supported", 1.5),
    ("thank", 1.9),
    ("thanks", 1.9),
    ("thrive", 2.4),
    ("thriving", 2.6),
    ("triumph", 3.0),
    ("victory", 2.9),
    ("welcome", 2.0),
    ("welcomed", 1.9),
    ("win", 2.8),
    ("winner", 2.8),
    ("wins", 2.7),
    ("won", 2.7),
    ("wonderful", 2.7),
    // Negative signals
    ("abuse", -3.1),
    ("abused", -3.0),
    ("accused", -1.9),
    ("anger", -2.7),
    ("angry", -2.3),
    ("arrest", -1.9),
    ("arrested", -2.0),
    ("assault", -2.8),
    ("attack", -2.1),
    ("attacked", -2.2),
    ("attacks", -2.0),
    ("bad", -2.5),
    ("ban", -1.9),
    ("banned", -2.0),
    ("blame", -2.1),
    ("blamed", -2.0),
    ("bomb", -3.0),
    ("cancel", -1.4),
    ("cancelled", -1.5),
    ("cancer", -3.4),
    ("chaos", -2.6),
    ("collapse", -2.2),
    ("collapsed", -2.1),
    ("concern", -1.4),
    ("concerned", -1.4),
    ("concerns", -1.3),
    ("corruption", -2.9),
    ("crash", -2.4),
    ("crashed", -2.3),
    ("crime", -2.5),
    ("criminal", -2.6),
    ("crisis", -2.6),
    ("cuts", -1.1),
    ("damage", -2.2),
    ("damaged", -2.1),
    ("danger", -2.6),
    ("dangerous", -2.5),
    ("dead", -3.3),
    ("death", -2.9),
    ("deaths", -2.8),
    ("debt", -1.9),
    ("delay", -1.3),
    ("delayed", -1.3),
    ("delays", -1.2),
    ("destroy", -2.9),
    ("destroyed", -2.8),
    ("die", -2.9),
    ("died", -2.8),
    ("dies", -2.9),
    ("disaster", -3.1),
    ("disease", -2.3),
    ("dispute", -1.6),
    ("drought", -1.8),
    ("dying", -3.0),
    ("emergency", -2.2),
    ("explosion", -2.4),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.6),
    ("fear", -2.2),
    ("feared", -2.2),
    ("fears", -2.1),
    ("fire", -1.6),
    ("flood", -1.9),
    ("floods", -1.8),
    ("fraud", -2.8),
    ("grief", -2.7),
    ("guilty", -2.6),
    ("homeless", -2.2),
    ("hurt", -2.4),
    ("illness", -2.0),
    ("injured", -2.2),
    ("injuries", -2.1),
    ("injury", -2.1),
    ("jail", -2.3),
    ("jailed", -2.4),
    ("kill", -3.7),
    ("killed", -3.6),
    ("killing", -3.4),
    ("lack", -1.4),
    ("lose", -1.9),
    ("loses", -1.8),
    ("loss", -2.0),
    ("lost", -1.9),
    ("missing", -1.5),
    ("mourn", -2.4),
    ("mourning", -2.5),
    ("murder", -3.7),
    ("murdered", -3.6),
    ("outrage", -2.9),
    ("pain", -2.5),
    ("painful", -2.4),
    ("poverty", -2.7),
    ("prison", -2.3),
    ("sad", -2.1),
    ("sadness", -2.4),
    ("scandal", -2.5),
    ("shooting", -3.0),
    ("shortage", -1.7),
    ("shot", -2.3),
    ("sick", -2.2),
    ("stabbed", -3.0),
    ("stabbing", -3.1),
    ("stolen", -2.2),
    ("storm", -1.4),
    ("strike", -1.6),
    ("strikes", -1.5),
    ("struggle", -1.9),
    ("struggling", -2.0),
    ("suffer", -2.6),
    ("suffered", -2.5),
    ("suffering", -2.8),
    ("terror", -3.2),
    ("terrorist", -3.6),
    ("theft", -2.3),
    ("threat", -2.4),
    ("threatened", -2.3),
    ("threats", -2.3),
    ("tragedy", -3.4),
    ("tragic", -3.3),
    ("victim", -2.1),
    ("victims", -2.0),
    ("violence", -3.1),
    ("violent", -2.9),
    ("war", -2.9),
    ("warn", -1.6),
    ("warned", -1.7),
    ("warning", -1.8),
    ("warns", -1.6),
    ("worried", -1.8),
    ("worries", -1.8),
    ("worry", -1.9),
    ("worse", -2.1),
    ("worst", -3.1),
];

/// Intensity modifiers. Positive weights amplify the following sentiment
/// word, negative weights dampen it.
pub(crate) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", 0.293),
    ("amazingly", 0.293),
    ("completely", 0.293),
    ("deeply", 0.293),
    ("especially", 0.293),
    ("extremely", 0.293),
    ("hugely", 0.293),
    ("incredibly", 0.293),
    ("really", 0.293),
    ("remarkably", 0.293),
    ("so", 0.293),
    ("totally", 0.293),
    ("utterly", 0.293),
    ("very", 0.293),
    ("almost", -0.293),
    ("barely", -0.293),
    ("hardly", -0.293),
    ("marginally", -0.293),
    ("partly", -0.293),
    ("scarcely", -0.293),
    ("slightly", -0.293),
    ("somewhat", -0.293),
];

pub(crate) const NEGATIONS: &[&str] = &[
    "no",
    "not",
    "none",
    "never",
    "neither",
    "nor",
    "nobody",
    "nothing",
    "nowhere",
    "without",
    "cannot",
    "cant",
    "can't",
    "dont",
    "don't",
    "doesnt",
    "doesn't",
    "didnt",
    "didn't",
    "isnt",
    "isn't",
    "arent",
    "aren't",
    "wasnt",
    "wasn't",
    "werent",
    "weren't",
    "wont",
    "won't",
    "wouldnt",
    "wouldn't",
    "shouldnt",
    "shouldn't",
    "couldnt",
    "couldn't",
];

/// Look up a token's base valence. Unknown tokens are `0.0`.
pub(crate) fn valence(word: &str) -> f64 {
    for &(lex_word, weight) in LEXICON {
        if word == lex_word {
            return weight;
        }
    }
    0.0
}

/// Look up a token's booster weight, if it is an intensity modifier.
pub(crate) fn booster_weight(word: &str) -> Option<f64> {
    for &(booster, weight) in BOOSTERS {
        if word == booster {
            return Some(weight);
        }
    }
    None
}

pub(crate) fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word)
}
