use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::Instant;

use delegate::delegate;
use log::{debug, info, warn};
use typed_builder::TypedBuilder;

use crate::error::LexiconError;
use crate::wordlist::trie::iterators::Words;
use crate::wordlist::trie::searchconfig::SearchConfig;
use crate::wordlist::trie::Trie;

/// A trie plus the plumbing to fill it from word list files and snapshots.
#[derive(Default, Debug)]
pub struct Wordlist {
    trie: Trie,
}

/// Layout of a word list: one record per line, optionally split into columns.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.delimiter {
            None => Some(line.trim()),
            Some(delimiter) => line.split(delimiter)
                .nth(self.word_column.unwrap_or(0))
                .map(str::trim),
        }
    }
}

impl Wordlist {
    pub fn new() -> Wordlist {
        Wordlist { trie: Trie::new() }
    }

    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Wordlist, LexiconError> {
        let mut wl = Wordlist::new();
        wl.load_file(path, format)?;
        Ok(wl)
    }

    /// Adds every word of the file at `path`, returning how many were new.
    /// Nothing is added if the file cannot be opened.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, format: &FileFormat) -> Result<usize, LexiconError> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);

        let file = File::open(path).map_err(|source| LexiconError::ResourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_reader(BufReader::new(file), format).map_err(|e| match e {
            LexiconError::ReadFailed(source) => LexiconError::ResourceUnavailable {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Adds one word per line of `reader`, returning how many were new. Lines
    /// that are not valid UTF-8 or lack the word column are skipped and counted
    /// as failures. Any other read error aborts the load with nothing added.
    pub fn load_reader<R: BufRead>(&mut self, reader: R, format: &FileFormat) -> Result<usize, LexiconError> {
        let start = Instant::now();
        let mut words: Vec<String> = vec![];
        let mut failures: usize = 0;

        for (number, line) in reader.lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                // the offending bytes are consumed, so reading can go on
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    warn!("Line #{} - {}", number + 1, e);
                    failures += 1;
                    continue;
                }
                Err(e) => {
                    warn!("Line #{} - {}, nothing loaded", number + 1, e);
                    return Err(LexiconError::ReadFailed(e));
                }
            };
            match format.parse_line(&line) {
                Some("") => {}
                Some(word) => words.push(word.to_string()),
                None => {
                    warn!("Line #{} - no word column in {:?}", number + 1, line);
                    failures += 1;
                }
            }
        }

        let added = words.iter()
            .fold(0, |added, word| if self.trie.insert(word) { added + 1 } else { added });
        info!("Added {} words in {:.3}s [{} failures], {} words total",
              added, start.elapsed().as_secs_f64(), failures, self.trie.word_count());
        Ok(added)
    }

    pub fn from_json(json: &str) -> Result<Wordlist, LexiconError> {
        Ok(Wordlist { trie: serde_json::from_str(json)? })
    }

    pub fn to_json(&self) -> Result<String, LexiconError> {
        Ok(serde_json::to_string(&self.trie)?)
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    delegate! {
        to self.trie {
            pub fn insert(&mut self, word: &str) -> bool;
            pub fn remove(&mut self, word: &str) -> bool;
            pub fn contains_word(&self, word: &str) -> bool;
            pub fn contains_prefix(&self, prefix: &str) -> bool;
            pub fn word_count(&self) -> usize;
            pub fn words(&self) -> Words<'_>;
            pub fn words_with_prefix(&self, prefix: &str) -> Words<'_>;
            pub fn suggest_corrections(&self, target: &str, max_distance: isize)
                                       -> Result<HashSet<String>, LexiconError>;
            pub fn match_pattern(&self, pattern: &str) -> HashSet<String>;
        }
    }

    /// Pattern search bounded by `config`, results sorted alphabetically.
    pub fn search(&self, pattern: &str, config: &SearchConfig) -> Result<Vec<String>, LexiconError> {
        let len = pattern.chars().count();
        if let Some(max) = config.max_pattern_len {
            if len > max {
                return Err(LexiconError::PatternTooLong { len, max });
            }
        }

        let start = Instant::now();
        let mut results: Vec<String> = self.trie.match_pattern(pattern).into_iter().collect();
        results.sort();
        debug!("{:?} matched {} words in {:.3}s", pattern, results.len(), start.elapsed().as_secs_f64());

        if let Some(max) = config.max_results {
            results.truncate(max);
        }
        Ok(results)
    }
}


#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, Write};

    use tempfile::NamedTempFile;

    use crate::error::LexiconError;
    use crate::wordlist::trie::searchconfig::SearchConfig;
    use crate::wordlist::wordlist::{FileFormat, Wordlist};

    fn word_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_one_word_per_line() {
        let file = word_file("Cat\ncar\n\n  dog \ncat\n");
        let mut wl = Wordlist::new();
        let added = wl.load_file(file.path(), &FileFormat::builder().build()).unwrap();

        assert_eq!(added, 3);
        assert_eq!(wl.word_count(), 3);
        assert_eq!(wl.words().collect::<Vec<_>>(), vec!["car", "cat", "dog"]);
    }

    #[test]
    fn missing_file_adds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut wl = Wordlist::new();
        match wl.load_file(dir.path().join("missing.txt"), &FileFormat::builder().build()) {
            Err(LexiconError::ResourceUnavailable { path, .. }) => assert!(path.ends_with("missing.txt")),
            other => panic!("expected ResourceUnavailable, got {:?}", other),
        }
        assert_eq!(wl.word_count(), 0);
    }

    #[test]
    fn directory_source_adds_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut wl = Wordlist::new();
        wl.insert("kept");
        match wl.load_file(dir.path(), &FileFormat::builder().build()) {
            Err(LexiconError::ResourceUnavailable { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("expected ResourceUnavailable, got {:?}", other),
        }
        assert_eq!(wl.word_count(), 1);
        assert_eq!(wl.words().collect::<Vec<_>>(), vec!["kept"]);
    }

    /// Fails every read, like a source that breaks partway through.
    struct BrokenSource;

    impl Read for BrokenSource {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "device went away"))
        }
    }

    #[test]
    fn read_error_midway_adds_nothing() {
        let reader = io::BufReader::new(Cursor::new("alpha\nbeta\n").chain(BrokenSource));
        let mut wl = Wordlist::new();
        match wl.load_reader(reader, &FileFormat::builder().build()) {
            Err(LexiconError::ReadFailed(e)) => assert_eq!(e.kind(), io::ErrorKind::Other),
            other => panic!("expected ReadFailed, got {:?}", other),
        }
        assert_eq!(wl.word_count(), 0);
        assert!(!wl.contains_word("alpha"));
    }

    #[test]
    fn loads_delimited_columns() {
        let format = FileFormat::builder().delimiter('\t').word_column(1).build();
        let mut wl = Wordlist::new();
        let added = wl.load_reader(Cursor::new("12\tapple\n7\tpear\nbroken\n"), &format).unwrap();

        assert_eq!(added, 2);
        assert!(wl.contains_word("apple"));
        assert!(wl.contains_word("pear"));
        assert!(!wl.contains_word("broken"));
    }

    #[test]
    fn skips_invalid_utf8_lines() {
        let mut wl = Wordlist::new();
        let bytes: &[u8] = b"one\n\xff\xfe\ntwo\n";
        assert_eq!(wl.load_reader(bytes, &FileFormat::builder().build()).unwrap(), 2);
        assert_eq!(wl.words().collect::<Vec<_>>(), vec!["one", "two"]);
    }

    #[test]
    fn search_sorts_and_bounds() {
        let mut wl = Wordlist::new();
        wl.load_reader(Cursor::new("cot\ncat\ncut\ncar\n"), &FileFormat::builder().build()).unwrap();

        let all = wl.search("c?t", &SearchConfig::new()).unwrap();
        assert_eq!(all, vec!["cat", "cot", "cut"]);

        let config = SearchConfig::builder().max_results(2).build();
        assert_eq!(wl.search("c?t", &config).unwrap(), vec!["cat", "cot"]);

        let config = SearchConfig::builder().max_pattern_len(2).build();
        assert!(matches!(wl.search("c?t", &config),
                         Err(LexiconError::PatternTooLong { len: 3, max: 2 })));
    }

    #[test]
    fn json_snapshot_round_trip() {
        let mut wl = Wordlist::new();
        wl.load_reader(Cursor::new("hello\nhelp\ngood\n"), &FileFormat::builder().build()).unwrap();
        wl.remove("help");

        let restored = Wordlist::from_json(&wl.to_json().unwrap()).unwrap();
        assert_eq!(restored.word_count(), 2);
        assert_eq!(restored.words().collect::<Vec<_>>(), vec!["good", "hello"]);
        assert!(restored.contains_prefix("hel"));
        assert!(!restored.contains_word("help"));
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        assert!(matches!(Wordlist::from_json("{\"not\": \"a trie\"}"),
                         Err(LexiconError::Snapshot(_))));
    }
}
