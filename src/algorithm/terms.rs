//! Word frequencies over diagnosis and complaint texts

use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::algorithm::aggregation::ValueCount;
use crate::collections::EncounterTable;
use crate::models::CategoricalColumn;
use crate::utils::text::fold_accents;

/// Columns whose text feeds the word cloud
pub const TERM_COLUMNS: [CategoricalColumn; 2] =
    [CategoricalColumn::Diagnosis, CategoricalColumn::Complaint];

/// Portuguese function words
pub const PORTUGUESE_STOPWORDS: &[&str] = &[
    "a", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às", "até",
    "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos",
    "e", "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "essa", "essas",
    "esse", "esses", "esta", "está", "estamos", "estão", "estas", "este", "esteja", "estejam",
    "estejamos", "estes", "estive", "estivemos", "estiveram", "estivermos", "estivesse",
    "estivessem", "estivéssemos", "estou", "eu", "foi", "fomos", "for", "fora", "foram",
    "forem", "formos", "fosse", "fossem", "fôssemos", "fui", "há", "havia", "hei", "houve",
    "houvemos", "houver", "houvera", "houverá", "houveram", "houverão", "houveria",
    "houveriam", "houveríamos", "houvermos", "houvesse", "houvessem", "houvéssemos", "isso",
    "isto", "já", "lhe", "lhes", "mais", "mas", "me", "mesmo", "meu", "meus", "minha",
    "minhas", "muito", "na", "não", "nas", "nem", "no", "nos", "nós", "nossa", "nossas",
    "nosso", "nossos", "num", "numa", "o", "os", "ou", "para", "pela", "pelas", "pelo",
    "pelos", "por", "porque", "qual", "quando", "que", "quem", "se", "seja", "sejam",
    "sejamos", "sem", "ser", "será", "serão", "seria", "seriam", "seríamos", "seu", "seus",
    "só", "somos", "sou", "sua", "suas", "também", "te", "tem", "tém", "temos", "tenha",
    "tenham", "tenhamos", "tenho", "terá", "terão", "teria", "teriam", "teríamos", "teu",
    "teus", "ti", "tido", "tinha", "tinham", "tínhamos", "tive", "tivemos", "tiver", "tivera",
    "tiveram", "tivermos", "tivesse", "tivessem", "tivéssemos", "tu", "tua", "tuas", "um",
    "uma", "uns", "você", "vocês", "vos", "ó",
];

/// Generic clinical words that carry no signal in a word cloud
pub const CLINICAL_STOPWORDS: &[&str] = &[
    "tipo", "crônica", "severa", "maior", "recorrentes", "generalizada", "óssea", "articular",
    "bacteriana", "viral", "extrema", "constante", "excessivo", "inesperado", "intensa",
    "aguda", "leve", "moderada", "grave", "sintomas", "doença", "paciente", "histórico",
    "diagnóstico", "infecção", "inflamação", "síndrome", "distúrbio", "crise", "ataque",
    "recorrência", "agudo", "secundária", "primária", "cuidado", "tratamento", "terapia",
    "medicamento", "clínica", "geral",
];

/// Counts word occurrences across free-text columns
#[derive(Debug, Clone)]
pub struct TermCounter {
    stopwords: FxHashSet<String>,
    skipped_values: FxHashSet<String>,
}

impl Default for TermCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl TermCounter {
    /// Counter with the Portuguese and clinical stopword lists
    #[must_use]
    pub fn new() -> Self {
        let stopwords = PORTUGUESE_STOPWORDS
            .iter()
            .chain(CLINICAL_STOPWORDS)
            .map(|word| fold_accents(word))
            .collect();
        Self {
            stopwords,
            skipped_values: FxHashSet::default(),
        }
    }

    /// Ignore cells equal to `value`, such as the missing-value placeholder
    #[must_use]
    pub fn skip_value(mut self, value: impl Into<String>) -> Self {
        self.skipped_values.insert(value.into());
        self
    }

    /// Add extra stopwords
    #[must_use]
    pub fn with_stopwords<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        self.stopwords
            .extend(words.into_iter().map(|word| fold_accents(&word.to_lowercase())));
        self
    }

    /// Whether a lowercased token is dropped
    #[must_use]
    pub fn is_stopword(&self, token: &str) -> bool {
        token.chars().count() < 2 || self.stopwords.contains(&fold_accents(token))
    }

    /// Lowercased tokens of `text` that survive the stopword lists
    pub fn tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .map(str::to_lowercase)
            .filter(|token| !self.is_stopword(token))
    }

    /// Raw token counts over the given texts
    pub fn count<'a>(&self, texts: impl IntoIterator<Item = &'a str>) -> FxHashMap<String, usize> {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();
        for text in texts {
            if self.skipped_values.contains(text) {
                continue;
            }
            for token in self.tokens(text) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        counts
    }

    /// The `limit` most frequent terms of the diagnosis and complaint columns
    #[must_use]
    pub fn frequencies(&self, table: &EncounterTable, limit: usize) -> Vec<ValueCount> {
        let texts = TERM_COLUMNS
            .iter()
            .flat_map(|column| table.column_values(*column));
        rank(merge_plurals(self.count(texts)), limit)
    }
}

/// Fold plural tokens into their singular when the singular also occurs
///
/// Both the `-s` and the `-es` plural are recognised (`febres` → `febre`,
/// `dores` → `dor`); words ending in `ss` are left alone.
#[must_use]
pub fn merge_plurals(counts: FxHashMap<String, usize>) -> FxHashMap<String, usize> {
    let mut merged: FxHashMap<String, usize> = FxHashMap::default();
    for (token, count) in &counts {
        let singular = singular_candidates(token)
            .find(|singular| counts.contains_key(*singular))
            .unwrap_or(token.as_str());
        *merged.entry(singular.to_string()).or_insert(0) += count;
    }
    merged
}

fn singular_candidates(token: &str) -> impl Iterator<Item = &str> {
    let stem = token.strip_suffix('s').filter(|_| !token.ends_with("ss"));
    let shorter = stem.and_then(|stem| stem.strip_suffix('e'));
    stem.into_iter()
        .chain(shorter)
        .filter(|candidate| !candidate.is_empty())
}

fn rank(counts: FxHashMap<String, usize>, limit: usize) -> Vec<ValueCount> {
    counts
        .into_iter()
        .sorted_by(|(a_term, a_count), (b_term, b_count)| {
            b_count.cmp(a_count).then_with(|| a_term.cmp(b_term))
        })
        .take(limit)
        .map(|(term, count)| ValueCount::new(term, count))
        .collect()
}

/// Top-`limit` word frequencies with the default stopword lists
#[must_use]
pub fn term_frequencies(table: &EncounterTable, limit: usize) -> Vec<ValueCount> {
    TermCounter::new().frequencies(table, limit)
}
