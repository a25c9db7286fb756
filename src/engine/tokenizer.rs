//! Splits extracted text into whitespace and non-whitespace runs.
//!
//! The token sequence always concatenates back to the input byte-for-byte.
//! Non-whitespace tokens are the words, numbered densely from zero, and the
//! index keeps both directions of the token/word mapping.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub is_whitespace: bool,
}

impl Token {
    pub fn is_word(&self) -> bool {
        !self.is_whitespace && !self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenIndex {
    tokens: Vec<Token>,
    words: Vec<String>,
    token_to_word: Vec<Option<usize>>,
    word_to_token: Vec<usize>,
}

pub fn tokenize(text: &str) -> TokenIndex {
    let mut index = TokenIndex::default();
    let mut run_start = 0;
    let mut run_is_ws = None;

    for (pos, ch) in text.char_indices() {
        let is_ws = ch.is_whitespace();
        match run_is_ws {
            Some(current) if current == is_ws => {}
            Some(current) => {
                index.push(&text[run_start..pos], current);
                run_start = pos;
                run_is_ws = Some(is_ws);
            }
            None => run_is_ws = Some(is_ws),
        }
    }

    if let Some(current) = run_is_ws {
        index.push(&text[run_start..], current);
    }

    index
}

impl TokenIndex {
    /// Rebuilds an index from a bare word list, as restored from storage.
    ///
    /// Every entry becomes exactly one word, even an empty one or one that
    /// contains whitespace, so stored word positions stay valid. Words are
    /// separated by single spaces.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let mut index = TokenIndex::default();
        for (i, word) in words.iter().enumerate() {
            if i > 0 {
                index.push(" ", true);
            }
            index.push_word(word.as_ref());
        }
        index
    }

    fn push_word(&mut self, text: &str) {
        self.token_to_word.push(Some(self.words.len()));
        self.word_to_token.push(self.tokens.len());
        self.words.push(text.to_string());
        self.tokens.push(Token {
            text: text.to_string(),
            is_whitespace: false,
        });
    }

    fn push(&mut self, text: &str, is_whitespace: bool) {
        let token = Token {
            text: text.to_string(),
            is_whitespace,
        };
        if token.is_word() {
            self.push_word(&token.text);
        } else {
            self.token_to_word.push(None);
            self.tokens.push(token);
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn word(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// `None` for whitespace tokens and out-of-range positions.
    pub fn word_for_token(&self, token: usize) -> Option<usize> {
        self.token_to_word.get(token).copied().flatten()
    }

    pub fn token_for_word(&self, word: usize) -> Option<usize> {
        self.word_to_token.get(word).copied()
    }

    pub fn token_to_word(&self) -> &[Option<usize>] {
        &self.token_to_word
    }

    pub fn word_to_token(&self) -> &[usize] {
        &self.word_to_token
    }

    pub fn reconstruct(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}
