use lazy_static::lazy_static;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::tokenizer::clean_word;
use crate::{Error, Result, WordList};

/// OpenCorpora part-of-speech grammemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Adjf,
    Adjs,
    Comp,
    Verb,
    Infn,
    Prtf,
    Prts,
    Grnd,
    Numr,
    Advb,
    Npro,
    Pred,
    Prep,
    Conj,
    Prcl,
    Intj,
}

impl PartOfSpeech {
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Adjf => "ADJF",
            PartOfSpeech::Adjs => "ADJS",
            PartOfSpeech::Comp => "COMP",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::Infn => "INFN",
            PartOfSpeech::Prtf => "PRTF",
            PartOfSpeech::Prts => "PRTS",
            PartOfSpeech::Grnd => "GRND",
            PartOfSpeech::Numr => "NUMR",
            PartOfSpeech::Advb => "ADVB",
            PartOfSpeech::Npro => "NPRO",
            PartOfSpeech::Pred => "PRED",
            PartOfSpeech::Prep => "PREP",
            PartOfSpeech::Conj => "CONJ",
            PartOfSpeech::Prcl => "PRCL",
            PartOfSpeech::Intj => "INTJ",
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let pos = match s {
            "NOUN" => PartOfSpeech::Noun,
            "ADJF" => PartOfSpeech::Adjf,
            "ADJS" => PartOfSpeech::Adjs,
            "COMP" => PartOfSpeech::Comp,
            "VERB" => PartOfSpeech::Verb,
            "INFN" => PartOfSpeech::Infn,
            "PRTF" => PartOfSpeech::Prtf,
            "PRTS" => PartOfSpeech::Prts,
            "GRND" => PartOfSpeech::Grnd,
            "NUMR" => PartOfSpeech::Numr,
            "ADVB" => PartOfSpeech::Advb,
            "NPRO" => PartOfSpeech::Npro,
            "PRED" => PartOfSpeech::Pred,
            "PREP" => PartOfSpeech::Prep,
            "CONJ" => PartOfSpeech::Conj,
            "PRCL" => PartOfSpeech::Prcl,
            "INTJ" => PartOfSpeech::Intj,
            other => return Err(format!("unknown part of speech {other:?}")),
        };
        Ok(pos)
    }
}

/// Grammatical tag of one interpretation. Only the grammemes the noun filter
/// looks at are kept: the part of speech and the Latin-script marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tag {
    pub pos: Option<PartOfSpeech>,
    pub latin: bool,
}

impl Tag {
    pub const UNKNOWN: Tag = Tag { pos: None, latin: false };
    pub const LATIN: Tag = Tag { pos: None, latin: true };

    pub fn of(pos: PartOfSpeech) -> Self {
        Tag { pos: Some(pos), latin: false }
    }

    pub fn is_noun(&self) -> bool {
        self.pos == Some(PartOfSpeech::Noun)
    }

    pub fn is_latin(&self) -> bool {
        self.latin
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.pos, self.latin) {
            (Some(pos), true) => write!(f, "{},LATN", pos.as_str()),
            (Some(pos), false) => f.write_str(pos.as_str()),
            (None, true) => f.write_str("LATN"),
            (None, false) => f.write_str("UNKN"),
        }
    }
}

/// Parses an OpenCorpora tag string such as `NOUN,inan,masc sing,nomn`.
/// Grammemes other than the part of speech and `LATN` are ignored.
impl FromStr for Tag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut tag = Tag::UNKNOWN;
        let mut seen = 0usize;
        for grammeme in s.split(|c: char| c == ',' || c.is_whitespace()).filter(|g| !g.is_empty()) {
            seen += 1;
            if grammeme == "LATN" {
                tag.latin = true;
            } else if let Ok(pos) = grammeme.parse::<PartOfSpeech>() {
                tag.pos = Some(pos);
            }
        }
        if seen == 0 {
            return Err("empty tag".to_string());
        }
        Ok(tag)
    }
}

/// One interpretation of a word.
#[derive(Debug, Clone, PartialEq)]
pub struct Parse {
    pub word: String,
    pub normal_form: String,
    pub tag: Tag,
    pub score: f32,
}

/// Morphological analysis of already cleaned words.
pub trait Analyzer {
    /// Interpretations of `word`, most probable first. Never fails: unknown
    /// or empty input yields an `UNKN` parse or no parses at all.
    fn parse(&self, word: &str) -> Vec<Parse>;
}

impl<A: Analyzer + ?Sized> Analyzer for Box<A> {
    fn parse(&self, word: &str) -> Vec<Parse> {
        (**self).parse(word)
    }
}

impl<A: Analyzer + ?Sized> Analyzer for &A {
    fn parse(&self, word: &str) -> Vec<Parse> {
        (**self).parse(word)
    }
}

/// Keep the normal forms of tokens whose most probable parse is a noun or a
/// Latin-script word, in input order.
pub fn filter_nouns<A, S>(analyzer: &A, words: &[S]) -> WordList
where
    A: Analyzer + ?Sized,
    S: AsRef<str>,
{
    let mut filtered = Vec::new();
    for word in words {
        let cleaned = clean_word(word.as_ref());
        if cleaned.is_empty() {
            continue;
        }
        let Some(best) = analyzer.parse(&cleaned).into_iter().next() else {
            continue;
        };
        if best.tag.is_noun() || best.tag.is_latin() {
            filtered.push(best.normal_form);
        }
    }
    filtered
}

const PREPOSITIONS: &[&str] = &[
    "в","во","на","с","со","к","ко","по","для","из","от","до","о","об","обо","при","про",
    "за","под","над","без","через","между","перед","около","после","вокруг","среди","вместо",
];
const CONJUNCTIONS: &[&str] = &[
    "и","а","но","или","что","чтобы","как","если","когда","то","ли","либо","зато","однако",
    "потому","поэтому","хотя","пока","тоже","также",
];
const PARTICLES: &[&str] = &[
    "не","ни","же","бы","уже","ещё","еще","только","даже","вот","лишь","разве","неужели","ведь",
];
const PRONOUNS: &[&str] = &[
    "я","ты","мы","вы","он","она","оно","они","его","её","ее","их","им","ему","ей","нам","вам",
    "нас","вас","себя","себе","это","этот","эта","эти","этого","тот","та","те","кто","сам",
    "свой","своя","свои","своих","мой","моя","мои","наш","наша","наши","ваш","ваша","ваши",
    "всё","все","весь","вся","всех","всем","какой","какая","какие","который","которая",
    "которые","которых","такой","такая","такие",
];
const ADVERBS: &[&str] = &[
    "где","куда","откуда","почему","зачем","очень","так","здесь","там","тут","сейчас",
    "теперь","всегда","никогда","иногда","быстро","просто","снова","больше","меньше",
    "лучше","хуже","почти","вообще",
];
const PREDICATIVES: &[&str] = &["можно","нужно","нельзя","надо"];
const NUMERALS: &[&str] = &[
    "один","одна","одно","два","две","три","четыре","пять","шесть","семь","восемь",
    "девять","десять","сто",
];

lazy_static! {
    static ref CLOSED_CLASS: HashMap<&'static str, PartOfSpeech> = {
        let groups = [
            (PartOfSpeech::Prep, PREPOSITIONS),
            (PartOfSpeech::Conj, CONJUNCTIONS),
            (PartOfSpeech::Prcl, PARTICLES),
            (PartOfSpeech::Npro, PRONOUNS),
            (PartOfSpeech::Advb, ADVERBS),
            (PartOfSpeech::Pred, PREDICATIVES),
            (PartOfSpeech::Numr, NUMERALS),
        ];
        let mut map = HashMap::new();
        for (pos, words) in groups {
            for word in words {
                map.insert(*word, pos);
            }
        }
        map
    };

    // nouns that the ending rules below would misclassify
    static ref NOUN_EXCEPTIONS: HashSet<&'static str> = [
        "сеть","путь","суть","нить","ртуть","треть","мать","печать","герой","покой","конвой",
        "строй","разбой","отбой","прибой","оружие","данные","будущее","прошлое","животное",
        "насекомое","мороженое","гений",
    ]
    .into_iter()
    .collect();
}

/// (suffix, minimum word length in chars, part of speech); first match wins.
const ENDINGS: &[(&str, usize, PartOfSpeech)] = &[
    ("ость", 5, PartOfSpeech::Noun),
    ("ние", 4, PartOfSpeech::Noun),
    ("тие", 4, PartOfSpeech::Noun),
    ("ия", 3, PartOfSpeech::Noun),
    ("рий", 5, PartOfSpeech::Noun),
    ("ться", 5, PartOfSpeech::Infn),
    ("чься", 5, PartOfSpeech::Infn),
    ("ся", 4, PartOfSpeech::Verb),
    ("сь", 4, PartOfSpeech::Verb),
    ("ать", 4, PartOfSpeech::Infn),
    ("ять", 4, PartOfSpeech::Infn),
    ("еть", 4, PartOfSpeech::Infn),
    ("ить", 4, PartOfSpeech::Infn),
    ("оть", 4, PartOfSpeech::Infn),
    ("уть", 4, PartOfSpeech::Infn),
    ("ыть", 4, PartOfSpeech::Infn),
    ("ает", 5, PartOfSpeech::Verb),
    ("яет", 5, PartOfSpeech::Verb),
    ("еет", 5, PartOfSpeech::Verb),
    ("ует", 5, PartOfSpeech::Verb),
    ("ают", 5, PartOfSpeech::Verb),
    ("яют", 5, PartOfSpeech::Verb),
    ("еют", 5, PartOfSpeech::Verb),
    ("уют", 5, PartOfSpeech::Verb),
    ("ешь", 4, PartOfSpeech::Verb),
    ("ишь", 4, PartOfSpeech::Verb),
    ("ала", 6, PartOfSpeech::Verb),
    ("ила", 6, PartOfSpeech::Verb),
    ("ого", 5, PartOfSpeech::Adjf),
    ("его", 5, PartOfSpeech::Adjf),
    ("ому", 5, PartOfSpeech::Adjf),
    ("ему", 5, PartOfSpeech::Adjf),
    ("ый", 4, PartOfSpeech::Adjf),
    ("ий", 4, PartOfSpeech::Adjf),
    ("ая", 4, PartOfSpeech::Adjf),
    ("яя", 4, PartOfSpeech::Adjf),
    ("ое", 4, PartOfSpeech::Adjf),
    ("ее", 4, PartOfSpeech::Adjf),
    ("ые", 4, PartOfSpeech::Adjf),
    ("ие", 4, PartOfSpeech::Adjf),
    ("ых", 4, PartOfSpeech::Adjf),
    ("их", 5, PartOfSpeech::Adjf),
    ("ым", 4, PartOfSpeech::Adjf),
    ("ую", 4, PartOfSpeech::Adjf),
    ("юю", 4, PartOfSpeech::Adjf),
    ("ой", 5, PartOfSpeech::Adjf),
];

/// Noun inflections whose dictionary form can be restored from the ending
/// alone: (inflected suffix, lemma suffix). Within a family the longer
/// suffix comes first.
const NOUN_SUFFIXES: &[(&str, &str)] = &[
    ("остями", "ость"),
    ("остям", "ость"),
    ("остях", "ость"),
    ("остью", "ость"),
    ("остей", "ость"),
    ("ости", "ость"),
    ("ологиями", "ология"),
    ("ологиям", "ология"),
    ("ологиях", "ология"),
    ("ологией", "ология"),
    ("ологий", "ология"),
    ("ологию", "ология"),
    ("ологии", "ология"),
    ("циями", "ция"),
    ("циям", "ция"),
    ("циях", "ция"),
    ("цией", "ция"),
    ("ций", "ция"),
    ("цию", "ция"),
    ("ции", "ция"),
    ("ениями", "ение"),
    ("ениях", "ение"),
    ("ением", "ение"),
];

fn is_cyrillic(c: char) -> bool {
    ('а'..='я').contains(&c) || c == 'ё'
}

fn noun_suffix(word: &str) -> Option<(&'static str, &'static str)> {
    let len = word.chars().count();
    NOUN_SUFFIXES
        .iter()
        .find(|(suffix, _)| word.ends_with(suffix) && len >= suffix.chars().count() + 2)
        .copied()
}

/// Dictionary-free analyzer for Russian titles, meant as the fallback behind
/// a [`DictionaryAnalyzer`].
///
/// Latin words are tagged `LATN` and kept as is. Cyrillic words are matched
/// against closed-class word lists and inflection endings; whatever remains is
/// taken to be a noun. A noun's normal form is restored only for the few
/// endings listed in `NOUN_SUFFIXES`; any other word is its own normal form.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn classify(word: &str) -> Tag {
        if word.is_empty() {
            return Tag::UNKNOWN;
        }
        if word.chars().all(|c| c.is_ascii_lowercase()) {
            return Tag::LATIN;
        }
        if !word.chars().all(is_cyrillic) {
            return Tag::UNKNOWN;
        }
        if let Some(pos) = CLOSED_CLASS.get(word) {
            return Tag::of(*pos);
        }
        if NOUN_EXCEPTIONS.contains(word) || noun_suffix(word).is_some() {
            return Tag::of(PartOfSpeech::Noun);
        }
        let len = word.chars().count();
        ENDINGS
            .iter()
            .find(|(suffix, min_len, _)| len >= *min_len && word.ends_with(suffix))
            .map_or(Tag::of(PartOfSpeech::Noun), |(_, _, pos)| Tag::of(*pos))
    }

    fn normal_form(word: &str, tag: Tag) -> String {
        if !tag.is_noun() || NOUN_EXCEPTIONS.contains(word) {
            return word.to_string();
        }
        match noun_suffix(word) {
            Some((suffix, lemma)) => format!("{}{lemma}", &word[..word.len() - suffix.len()]),
            None => word.to_string(),
        }
    }
}

impl Analyzer for HeuristicAnalyzer {
    fn parse(&self, word: &str) -> Vec<Parse> {
        let tag = Self::classify(word);
        let normal_form = Self::normal_form(word, tag);
        vec![Parse { word: word.to_string(), normal_form, tag, score: 0.5 }]
    }
}

const BUNDLED_LEXICON: &str = include_str!("../data/lexicon.tsv");

/// Analyzer backed by a tab-separated lexicon, one interpretation per line:
///
/// ```text
/// # form   lemma   tag
/// коты    кот     NOUN,anim,masc plur,nomn
/// ```
///
/// Lines for the same form are kept in file order, which is taken as the
/// probability order. Forms missing from the lexicon go to `fallback`; when
/// the fallback calls such a form a noun and its Snowball stem matches the
/// stem of a noun lemma in the lexicon, that lemma becomes its normal form.
pub struct DictionaryAnalyzer<F> {
    entries: HashMap<String, Vec<(String, Tag)>>,
    lemmas_by_stem: HashMap<String, String>,
    stemmer: Stemmer,
    fallback: F,
}

impl DictionaryAnalyzer<HeuristicAnalyzer> {
    /// The Russian lexicon compiled into the crate, with the heuristic rules
    /// behind it.
    pub fn bundled() -> Result<Self> {
        let analyzer = Self::from_tsv(BUNDLED_LEXICON, HeuristicAnalyzer::new())?;
        tracing::debug!(forms = analyzer.len(), "loaded bundled lexicon");
        Ok(analyzer)
    }
}

impl<F: Analyzer> DictionaryAnalyzer<F> {
    pub fn load<P: AsRef<Path>>(path: P, fallback: F) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let analyzer = Self::from_tsv(&text, fallback)?;
        tracing::info!(path = %path.as_ref().display(), forms = analyzer.len(), "loaded dictionary");
        Ok(analyzer)
    }

    pub fn from_tsv(text: &str, fallback: F) -> Result<Self> {
        let stemmer = Stemmer::create(Algorithm::Russian);
        let mut entries: HashMap<String, Vec<(String, Tag)>> = HashMap::new();
        let mut lemmas_by_stem = HashMap::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let malformed = |reason: String| Error::Dictionary { line: idx + 1, reason };
            let mut fields = line.split('\t').map(str::trim);
            let (Some(form), Some(lemma), Some(tag)) = (fields.next(), fields.next(), fields.next()) else {
                return Err(malformed("expected form, lemma and tag separated by tabs".into()));
            };
            let tag: Tag = tag.parse().map_err(malformed)?;
            let form = clean_word(form);
            if form.is_empty() {
                return Err(malformed("form has no letters".into()));
            }
            let lemma = lemma.to_lowercase();
            if tag.is_noun() {
                lemmas_by_stem.entry(stemmer.stem(&lemma).into_owned()).or_insert_with(|| lemma.clone());
            }
            entries.entry(form).or_default().push((lemma, tag));
        }
        Ok(Self { entries, lemmas_by_stem, stemmer, fallback })
    }

    /// Number of distinct forms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn guess(&self, word: &str) -> Vec<Parse> {
        let mut parses = self.fallback.parse(word);
        if !parses.iter().any(|p| p.tag.is_noun()) {
            return parses;
        }
        if let Some(lemma) = self.lemmas_by_stem.get(&*self.stemmer.stem(word)) {
            for parse in parses.iter_mut().filter(|p| p.tag.is_noun()) {
                parse.normal_form = lemma.clone();
            }
        }
        parses
    }
}

impl<F: Analyzer> Analyzer for DictionaryAnalyzer<F> {
    fn parse(&self, word: &str) -> Vec<Parse> {
        match self.entries.get(word) {
            Some(found) => found
                .iter()
                .enumerate()
                .map(|(rank, (lemma, tag))| Parse {
                    word: word.to_string(),
                    normal_form: lemma.clone(),
                    tag: *tag,
                    score: 1.0 / (rank + 1) as f32,
                })
                .collect(),
            None => self.guess(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_of(word: &str) -> Tag {
        HeuristicAnalyzer::new().parse(word)[0].tag
    }

    #[test]
    fn latin_words_pass_through() {
        let parses = HeuristicAnalyzer::new().parse("docker");
        assert_eq!(parses.len(), 1);
        assert!(parses[0].tag.is_latin());
        assert_eq!(parses[0].normal_form, "docker");
    }

    #[test]
    fn empty_and_mixed_script_are_unknown() {
        assert_eq!(tag_of(""), Tag::UNKNOWN);
        assert_eq!(tag_of("rustы"), Tag::UNKNOWN);
    }

    #[test]
    fn closed_classes_are_not_nouns() {
        assert_eq!(tag_of("как").pos, Some(PartOfSpeech::Conj));
        assert_eq!(tag_of("мы").pos, Some(PartOfSpeech::Npro));
        assert_eq!(tag_of("для").pos, Some(PartOfSpeech::Prep));
        assert_eq!(tag_of("не").pos, Some(PartOfSpeech::Prcl));
    }

    #[test]
    fn endings_pick_verbs_and_adjectives() {
        assert_eq!(tag_of("писать").pos, Some(PartOfSpeech::Infn));
        assert_eq!(tag_of("работает").pos, Some(PartOfSpeech::Verb));
        assert_eq!(tag_of("используется").pos, Some(PartOfSpeech::Verb));
        assert_eq!(tag_of("новый").pos, Some(PartOfSpeech::Adjf));
    }

    #[test]
    fn heuristic_normal_forms_are_words_not_stems() {
        let analyzer = HeuristicAnalyzer::new();
        for (word, lemma) in [
            ("кот", "кот"),
            ("парсер", "парсер"),
            ("безопасности", "безопасность"),
            ("уязвимостями", "уязвимость"),
            ("технологии", "технология"),
            ("функций", "функция"),
            ("обновлением", "обновление"),
            ("управление", "управление"),
            ("оружие", "оружие"),
            ("данные", "данные"),
        ] {
            let best = &analyzer.parse(word)[0];
            assert!(best.tag.is_noun(), "{word} should be a noun");
            assert_eq!(best.normal_form, lemma, "for {word}");
        }
        assert!(tag_of("сеть").is_noun());

        let titles = ["Безопасность", "Управление", "Базы", "Серверов", "Машина", "Данные", "Оружие"];
        assert_eq!(
            filter_nouns(&analyzer, &titles),
            vec!["безопасность", "управление", "базы", "серверов", "машина", "данные", "оружие"]
        );
    }

    #[test]
    fn bundled_lexicon_gives_dictionary_lemmas() {
        let dict = DictionaryAnalyzer::bundled().unwrap();
        assert!(!dict.is_empty());
        for (word, lemma) in [
            ("безопасности", "безопасность"),
            ("базы", "база"),
            ("данные", "данные"),
            ("данных", "данные"),
            ("серверов", "сервер"),
            ("люди", "человек"),
        ] {
            let best = &dict.parse(word)[0];
            assert!(best.tag.is_noun(), "{word} should be a noun");
            assert_eq!(best.normal_form, lemma, "for {word}");
        }

        let titles = ["Безопасность", "Управление", "Базы", "Серверов", "Машина", "Данные", "Оружие"];
        assert_eq!(
            filter_nouns(&dict, &titles),
            vec!["безопасность", "управление", "база", "сервер", "машина", "данные", "оружие"]
        );
        // past-tense verbs look like nouns to the ending rules
        assert_eq!(filter_nouns(&dict, &["Хакеры", "украли", "пароли"]), vec!["хакер", "пароль"]);
    }

    #[test]
    fn unknown_forms_borrow_a_lemma_with_the_same_stem() {
        let dict = DictionaryAnalyzer::from_tsv("сервер\tсервер\tNOUN,inan,masc sing,nomn\n", HeuristicAnalyzer::new())
            .unwrap();
        assert_eq!(dict.parse("серверов")[0].normal_form, "сервер");
        assert_eq!(dict.parse("кот")[0].normal_form, "кот");
        assert_eq!(dict.parse("писать")[0].normal_form, "писать");
    }

    #[test]
    fn filter_keeps_nouns_and_latin_in_order() {
        let analyzer = HeuristicAnalyzer::new();
        let words = filter_nouns(&analyzer, &["Как", "мы", "ускорить", "парсер", "на", "Rust", "—", "2024"]);
        assert_eq!(words, vec!["парсер".to_string(), "rust".into()]);
    }

    #[test]
    fn filter_never_grows_or_emits_empty() {
        let analyzer = HeuristicAnalyzer::new();
        let input = ["!!!", "", "Кот", "и", "пёс", "42"];
        let out = filter_nouns(&analyzer, &input);
        assert!(out.len() <= input.len());
        assert!(out.iter().all(|w| !w.is_empty()));
    }

    #[test]
    fn tag_strings_round_trip_the_part_of_speech() {
        let tag: Tag = "NOUN,anim,masc sing,nomn".parse().unwrap();
        assert!(tag.is_noun());
        assert_eq!(tag.to_string(), "NOUN");
        let latin: Tag = "LATN".parse().unwrap();
        assert!(latin.is_latin());
        assert_eq!("NUMB,intg".parse::<Tag>().unwrap(), Tag::UNKNOWN);
        assert!("".parse::<Tag>().is_err());
    }

    #[test]
    fn dictionary_prefers_its_entries_and_falls_back() {
        let lexicon = "# form\tlemma\ttag\n\
                       стали\tсталь\tNOUN,inan,femn plur,nomn\n\
                       стали\tстать\tVERB,perf,intr plur,past,indc\n\
                       данные\tданные\tNOUN,inan,plur,nomn\n";
        let dict = DictionaryAnalyzer::from_tsv(lexicon, HeuristicAnalyzer::new()).unwrap();
        assert_eq!(dict.len(), 2);

        let parses = dict.parse("стали");
        assert_eq!(parses.len(), 2);
        assert_eq!(parses[0].normal_form, "сталь");
        assert!(parses[0].score > parses[1].score);

        // not in the lexicon: heuristic fallback
        assert_eq!(dict.parse("кот")[0].normal_form, "кот");

        let words = filter_nouns(&dict, &["Данные", "стали", "писать"]);
        assert_eq!(words, vec!["данные".to_string(), "сталь".into()]);
    }

    #[test]
    fn dictionary_reports_malformed_lines() {
        let err = DictionaryAnalyzer::from_tsv("кот\tкот\tNOUN\nпёс пёс\n", HeuristicAnalyzer::new())
            .err()
            .unwrap();
        match err {
            Error::Dictionary { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn dictionary_loads_from_disk() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ежи\tёж\tNOUN,anim,masc plur,nomn").unwrap();
        let dict = DictionaryAnalyzer::load(file.path(), HeuristicAnalyzer::new()).unwrap();
        assert_eq!(dict.parse("ежи")[0].normal_form, "ёж");
    }
}
