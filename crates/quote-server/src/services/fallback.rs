//! Compiled-in quote lists served when no remote store is available

use crate::config::ServiceVariant;
use crate::services::QuoteList;
use quote_types::Quote;

/// Authored fallback for the persistent variant
const PERSISTENT_QUOTES: &[(&str, &str)] = &[
    ("✨ The best way to get started is to quit talking and begin doing.", "Walt Disney"),
    ("🔥 Don't let yesterday take up too much of today.", "Will Rogers"),
    ("💪 It's not whether you get knocked down, it's whether you get up.", "Vince Lombardi"),
    ("🚀 If you are working on something exciting, it will keep you motivated.", "GenZ Wisdom"),
    ("🌈 Success is not in what you have, but who you are.", "Bo Bennett"),
    ("😎 Dream big, hustle harder.", "GenZ Motivation"),
    ("👾 Stay weird, stay creative.", "GenZ Vibes"),
    ("🦄 Be yourself, everyone else is taken.", "Oscar Wilde"),
    ("💥 Make it happen, Gen Z style!", "GenZ Energy"),
    ("🌟 You are the main character of your story.", "GenZ Wisdom"),
];

/// Unauthored list for the static variant
const STATIC_QUOTES: &[&str] = &[
    "✨ The best way to get started is to quit talking and begin doing.",
    "🔥 Don't let yesterday take up too much of today.",
    "💪 It's not whether you get knocked down, it's whether you get up.",
    "🚀 If you are working on something exciting, it will keep you motivated.",
    "🌈 Success is not in what you have, but who you are.",
    "😎 Dream big, hustle harder.",
    "👾 Stay weird, stay creative.",
    "🦄 Be yourself, everyone else is taken.",
    "💥 Make it happen, Gen Z style!",
    "🌟 You are the main character of your story.",
    "🎧 Good vibes only.",
    "💡 Think different, act bold.",
    "🫶 Spread kindness like confetti.",
    "📱 Disconnect to reconnect.",
    "🕺 Dance like nobody's watching.",
    "🍀 Luck is when preparation meets opportunity.",
    "🧠 Mindset is everything.",
    "🔥 Hustle in silence, let success make the noise.",
    "🌊 Go with the flow, but make waves.",
    "🎨 Create your own reality.",
    "💬 Speak your truth.",
    "🌻 Grow through what you go through.",
    "🦋 Change is beautiful.",
    "🎲 Take risks, regret nothing.",
    "💎 Shine bright, even on cloudy days.",
    "🌌 The future belongs to those who believe in the beauty of their dreams.",
    "🌍 Your limitation—it's only your imagination.",
    "🌠 Push yourself, because no one else is going to do it for you.",
    "🌻 Great things never come from comfort zones.",
    "🌈 Dream it. Wish it. Do it.",
    "💪 Success doesn’t just find you. You have to go out and get it.",
    "🌟 The harder you work for something, the greater you’ll feel when you achieve it.",
    "🌊 Dream bigger. Do bigger.",
    "💡 Don’t stop when you’re tired. Stop when you’re done.",
    "🔥 Wake up with determination. Go to bed with satisfaction.",
    "🌻 Do something today that your future self will thank you for.",
    "🌌 Little things make big days.",
    "🌈 It’s going to be hard, but hard does not mean impossible.",
    "💎 Push yourself, because no one else is going to do it for you.",
];

/// Build the fallback list for a variant. Ids are 1-based positions.
pub fn fallback_quotes(variant: ServiceVariant) -> QuoteList {
    let quotes: Vec<Quote> = match variant {
        ServiceVariant::Persistent => PERSISTENT_QUOTES
            .iter()
            .zip(1..)
            .map(|(&(text, author), id)| Quote::new(id, text, author))
            .collect(),
        ServiceVariant::Static => STATIC_QUOTES
            .iter()
            .zip(1..)
            .map(|(&text, id)| Quote::new(id, text, ""))
            .collect(),
    };

    QuoteList::from_static(quotes)
}
