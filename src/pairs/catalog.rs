pub const PLACEHOLDER: &str = "🌿";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Symbol
{
    pub emoji: &'static str,
    pub name: &'static str,
}

impl Symbol
{
    pub const fn new(emoji: &'static str, name: &'static str) -> Self
    {
        Self { emoji, name }
    }
}

pub const ANIMALS: [Symbol; 8] = [
    Symbol::new("🐘", "Elephant"),
    Symbol::new("🐼", "Panda"),
    Symbol::new("🐧", "Penguin"),
    Symbol::new("🦊", "Fox"),
    Symbol::new("🐢", "Turtle"),
    Symbol::new("🦉", "Owl"),
    Symbol::new("🦁", "Lion"),
    Symbol::new("🐋", "Whale"),
];

pub const MIN_PAIRS: usize = 2;
pub const MAX_PAIRS: usize = ANIMALS.len();

pub fn animals(pairs: usize) -> &'static [Symbol]
{
    &ANIMALS[..pairs.clamp(MIN_PAIRS, MAX_PAIRS)]
}
