// Canonical book tables for both corpora.
//
// Book numbers are canonical across the whole Bible: the Hebrew canon takes
// 1-39 and New Testament books follow at 40-66.

/// Hebrew canon books in canonical order.
pub const OT_BOOKS: [&str; 39] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "I Samuel",
    "II Samuel",
    "I Kings",
    "II Kings",
    "I Chronicles",
    "II Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
];

/// New Testament books in canonical order.
pub const NT_BOOKS: [&str; 27] = [
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Added to a New Testament book's order to get its canonical number.
pub const NT_OFFSET: u32 = 39;

/// Added to a New Testament book's order in GNT file names
/// (`61-Mt-morphgnt.txt` is Matthew).
pub const GNT_FILE_OFFSET: u32 = 60;

const GNT_FILE_SUFFIX: &str = "-morphgnt";

/// A book with its canonical number (1-66).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Book {
    pub number: u32,
    pub name: &'static str,
}

impl Book {
    /// Hebrew canon book by canonical number.
    pub fn old_testament(number: u32) -> Option<Self> {
        let idx = (number as usize).checked_sub(1)?;
        OT_BOOKS.get(idx).map(|&name| Book { number, name })
    }

    /// New Testament book by its order within the New Testament (1-27).
    pub fn new_testament(order: u32) -> Option<Self> {
        let idx = (order as usize).checked_sub(1)?;
        NT_BOOKS.get(idx).map(|&name| Book {
            number: order + NT_OFFSET,
            name,
        })
    }

    pub fn is_new_testament(&self) -> bool {
        self.number > NT_OFFSET
    }

    /// Name with spaces removed and lowercased, as used by WLC file names.
    pub fn file_stem(&self) -> String {
        self.name.replace(' ', "").to_lowercase()
    }
}

/// Resolve a WLC file stem (`"isamuel"`, `"SongofSolomon"`) to its book.
///
/// Matching is case-insensitive against the book name with spaces removed.
pub fn wlc_book_for_stem(stem: &str) -> Option<Book> {
    let wanted = stem.to_lowercase();
    (1..=OT_BOOKS.len() as u32)
        .filter_map(Book::old_testament)
        .find(|b| b.file_stem() == wanted)
}

/// Resolve a GNT file stem (`"61-Mt-morphgnt"`) to its book.
pub fn gnt_book_for_stem(stem: &str) -> Option<Book> {
    let rest = stem.strip_suffix(GNT_FILE_SUFFIX)?;
    let (number, abbrev) = rest.split_once('-')?;
    if abbrev.is_empty() || !abbrev.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let number: u32 = number.parse().ok()?;
    Book::new_testament(number.checked_sub(GNT_FILE_OFFSET)?)
}
