//! Alphabet sequence and the word/picture paired with each letter

/// The 26 letters in drill order.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Index of the final letter.
pub const LAST_INDEX: usize = ALPHABET.len() - 1;

/// Word and picture shown with a letter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterRecord {
    pub letter: char,
    pub word: &'static str,
    /// Remote icon URL
    pub image: &'static str,
}

const fn rec(letter: char, word: &'static str, image: &'static str) -> LetterRecord {
    LetterRecord {
        letter,
        word,
        image,
    }
}

/// One record per alphabet position, same order as [`ALPHABET`].
pub const LETTERS: [LetterRecord; 26] = [
    rec('A', "Apple", "https://img.icons8.com/color/192/apple.png"),
    rec('B', "Ball", "https://img.icons8.com/color/192/football2.png"),
    rec('C', "Cat", "https://img.icons8.com/color/192/cat.png"),
    rec('D', "Dog", "https://img.icons8.com/color/192/dog.png"),
    rec('E', "Elephant", "https://img.icons8.com/color/192/elephant.png"),
    rec('F', "Fish", "https://img.icons8.com/color/192/fish.png"),
    rec('G', "Grapes", "https://img.icons8.com/color/192/grapes.png"),
    rec('H', "Hat", "https://img.icons8.com/color/192/hat.png"),
    rec('I', "Ice", "https://img.icons8.com/color/192/ice-cream.png"),
    rec('J', "Juice", "https://img.icons8.com/color/192/orange-juice.png"),
    rec('K', "Kite", "https://img.icons8.com/color/192/kite.png"),
    rec('L', "Lion", "https://img.icons8.com/color/192/lion.png"),
    rec('M', "Monkey", "https://img.icons8.com/color/192/monkey.png"),
    rec('N', "Nest", "https://img.icons8.com/color/192/nest.png"),
    rec('O', "Orange", "https://img.icons8.com/color/192/orange.png"),
    rec('P', "Pig", "https://img.icons8.com/color/192/pig.png"),
    rec('Q', "Queen", "https://img.icons8.com/color/192/queen-king.png"),
    rec('R', "Rabbit", "https://img.icons8.com/color/192/rabbit.png"),
    rec('S', "Sun", "https://img.icons8.com/color/192/sun.png"),
    rec('T', "Tiger", "https://img.icons8.com/color/192/tiger.png"),
    rec('U', "Umbrella", "https://img.icons8.com/color/192/umbrella.png"),
    rec('V', "Violin", "https://img.icons8.com/color/192/violin.png"),
    rec('W', "Whale", "https://img.icons8.com/color/192/whale.png"),
    rec('X', "Xylophone", "https://img.icons8.com/color/192/xylophone.png"),
    rec('Y', "Yacht", "https://img.icons8.com/color/192/yacht.png"),
    rec('Z', "Zebra", "https://img.icons8.com/color/192/zebra.png"),
];

/// Letter record for an alphabet position
pub fn record(index: usize) -> Option<&'static LetterRecord> {
    LETTERS.get(index)
}

/// Expected letter at an alphabet position
pub fn letter_at(index: usize) -> Option<char> {
    record(index).map(|r| r.letter)
}
