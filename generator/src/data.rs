//! Vocabulary pools for synthetic catalogs.

pub struct Industry {
    pub name: &'static str,
    pub language: &'static str,
    pub genres: &'static [&'static str],
    pub name_patterns: &'static [&'static str],
    pub titles: &'static [&'static str],
}

pub const INDUSTRIES: [Industry; 3] = [
    Industry {
        name: "Hollywood",
        language: "English",
        genres: &[
            "Action", "Adventure", "Comedy", "Drama", "Horror", "Romance", "Sci-Fi", "Thriller", "Fantasy",
            "Crime", "Mystery", "Animation", "Documentary", "War", "Western", "Musical", "Biography",
        ],
        name_patterns: &[
            "The", "A", "In", "Beyond", "Lost", "Dark", "Red", "Blue", "Green", "Final", "Last", "First", "New",
            "Old", "Young", "Great", "Little",
        ],
        titles: &[
            "Guardian", "Legacy", "Journey", "Revenge", "Justice", "Hope", "Destiny", "Courage", "Freedom",
            "Echo", "Shadow", "Light", "Storm", "Fire", "Ice", "Dawn", "Dusk", "Dream", "Night", "Day", "Time",
            "Space", "World", "City", "River", "Mountain", "Ocean", "Star", "Moon", "Sun", "Warrior", "Hero",
            "King", "Queen", "Prince", "Princess", "Legend", "Myth", "Tale", "Story", "Chronicle", "Code",
            "Secret", "Mission", "Quest",
        ],
    },
    Industry {
        name: "Bollywood",
        language: "Hindi",
        genres: &[
            "Drama", "Romance", "Comedy", "Action", "Thriller", "Family", "Musical", "Crime", "Horror",
            "Biography", "Sports", "Adventure", "Historical", "Social", "Period", "Suspense",
        ],
        name_patterns: &[
            "Mera", "Teri", "Hum", "Kya", "Jab", "Kabhi", "Aap", "Dil", "Pyar", "Ishq", "Dost", "Yaar",
            "Zindagi", "Sapna", "Aasman",
        ],
        titles: &[
            "Dil", "Mohabbat", "Ishq", "Pyar", "Dosti", "Yaari", "Wafa", "Dard", "Khushi", "Gham", "Hasina",
            "Raja", "Rani", "Beta", "Bhai", "Didi", "Maa", "Papa", "Dharam", "Karma", "Kismat", "Naseeb",
            "Taqdeer", "Jannat", "Duniya", "Desh", "Watan", "Vatan", "Dil", "Jigar", "Roop", "Rang", "Raat",
            "Din", "Saal", "Yeh", "Woh", "Tum", "Main",
        ],
    },
    Industry {
        name: "Lollywood",
        language: "Urdu",
        genres: &[
            "Drama", "Romance", "Comedy", "Action", "Family", "Social", "Thriller", "Crime", "Horror",
            "Biography", "Musical", "Adventure",
        ],
        name_patterns: &[
            "Mere", "Tumhare", "Hum", "Kya", "Jab", "Kabhi", "Aap", "Dil", "Pyar", "Mohabbat", "Dost", "Yaar",
            "Zindagi", "Khwab", "Aasman",
        ],
        titles: &[
            "Dil", "Mohabbat", "Ishq", "Pyar", "Dosti", "Yaari", "Wafa", "Dard", "Khushi", "Gham", "Hasina",
            "Raja", "Rani", "Beta", "Bhai", "Didi", "Maa", "Abba", "Dunya", "Dil", "Jigar", "Roop", "Rang",
            "Raat", "Din", "Yeh", "Woh", "Tum", "Main", "Jaan", "Sajan", "Pyar", "Ishq", "Dilbar", "Mehboob",
        ],
    },
];

pub fn industry(name: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.name.eq_ignore_ascii_case(name))
}

/// Overview templates keyed by primary genre. Genres without templates use Drama's.
pub const OVERVIEW_TEMPLATES: [(&str, [&str; 4]); 8] = [
    ("Action", [
        "A hero must save the world from imminent destruction using their extraordinary skills.",
        "An elite warrior embarks on a dangerous mission to stop a global threat.",
        "A former soldier returns to action to protect those he loves from danger.",
        "A skilled fighter must overcome impossible odds to achieve victory.",
    ]),
    ("Romance", [
        "Two strangers find love in the most unexpected circumstances.",
        "A passionate love story that transcends all boundaries and obstacles.",
        "Two hearts destined to be together face challenges that test their bond.",
        "A tale of love, loss, and the power of true connection.",
    ]),
    ("Drama", [
        "A compelling story about human relationships and life's complexities.",
        "An emotional journey through the trials and triumphs of the human spirit.",
        "A powerful narrative that explores themes of love, sacrifice, and redemption.",
        "A moving story that delves deep into the human condition.",
    ]),
    ("Comedy", [
        "A hilarious adventure filled with laughter and unexpected twists.",
        "A group of friends find themselves in the most comical situations.",
        "A lighthearted story that brings joy and entertainment to all.",
        "A fun-filled journey with unforgettable characters and humorous moments.",
    ]),
    ("Thriller", [
        "A suspenseful tale of mystery and danger that keeps you on the edge.",
        "A race against time to uncover the truth before it's too late.",
        "A gripping story of secrets, lies, and unexpected revelations.",
        "A tense narrative where nothing is as it seems.",
    ]),
    ("Sci-Fi", [
        "A futuristic adventure that explores the boundaries of technology and humanity.",
        "A journey through time and space to save the future.",
        "An exploration of advanced technology and its impact on society.",
        "A story set in a world where science fiction becomes reality.",
    ]),
    ("Horror", [
        "A terrifying journey into the unknown that will keep you awake.",
        "A spine-chilling tale of supernatural forces and dark secrets.",
        "A horror story that tests the limits of fear and survival.",
        "A dark narrative filled with suspense and terrifying moments.",
    ]),
    ("Adventure", [
        "An epic journey to discover hidden treasures and ancient secrets.",
        "A thrilling expedition into uncharted territories filled with danger.",
        "An adventurous quest that leads to unexpected discoveries.",
        "A journey of a lifetime that changes everything.",
    ]),
];

pub fn templates_for(genre: &str) -> &'static [&'static str; 4] {
    OVERVIEW_TEMPLATES
        .iter()
        .find(|(g, _)| *g == genre)
        .or_else(|| OVERVIEW_TEMPLATES.iter().find(|(g, _)| *g == "Drama"))
        .map(|(_, t)| t)
        .unwrap_or(&OVERVIEW_TEMPLATES[2].1)
}
