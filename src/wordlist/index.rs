/// Dictionary operations shared by word stores.
pub trait Lexicon {
    fn add_word(&mut self, word: &str) -> bool;
    fn remove_word(&mut self, word: &str) -> bool;
    fn contains_word(&self, word: &str) -> bool;
    fn contains_prefix(&self, prefix: &str) -> bool;
    fn num_words(&self) -> usize;

    /// Adds every word, returning how many were new.
    fn add_all<'a, I>(&mut self, items: I) -> usize
        where I: IntoIterator<Item=&'a str> {
        items.into_iter()
            .fold(0, |added, x| if self.add_word(x) { added + 1 } else { added })
    }
}
