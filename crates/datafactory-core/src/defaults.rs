//! Built-in value tables.

pub const FIRST_NAMES: &[&str] = &[
    "Aaron", "Abigail", "Adam", "Alan", "Albert", "Alexander", "Alexis", "Alice", "Amanda", "Amber",
    "Amy", "Andrea", "Andrew", "Angela", "Ann", "Anna", "Anthony", "Arthur", "Ashley", "Barbara",
    "Benjamin", "Betty", "Beverly", "Billy", "Bobby", "Brandon", "Brenda", "Brian", "Bruce",
    "Carl", "Carol", "Carolyn", "Catherine", "Charles", "Cheryl", "Christian", "Christina",
    "Christine", "Christopher", "Cynthia", "Daniel", "Danielle", "David", "Deborah", "Debra",
    "Dennis", "Diana", "Diane", "Donald", "Donna", "Doris", "Dorothy", "Douglas", "Dylan",
    "Edward", "Elizabeth", "Emily", "Emma", "Eric", "Ethan", "Eugene", "Evelyn", "Frances",
    "Frank", "Gabriel", "Gary", "George", "Gerald", "Gloria", "Grace", "Gregory", "Hannah",
    "Harold", "Heather", "Helen", "Henry", "Isabella", "Jack", "Jacob", "Jacqueline", "James",
    "Janet", "Janice", "Jason", "Jean", "Jeffrey", "Jennifer", "Jeremy", "Jerry", "Jesse",
    "Jessica", "Joan", "Joe", "John", "Johnny", "Jonathan", "Jordan", "Jose", "Joseph", "Joshua",
    "Joyce", "Juan", "Judith", "Judy", "Julia", "Julie", "Justin", "Karen", "Katherine",
    "Kathleen", "Kathryn", "Kayla", "Keith", "Kelly", "Kenneth", "Kevin", "Kimberly", "Kyle",
    "Larry", "Laura", "Lauren", "Lawrence", "Linda", "Lisa", "Logan", "Louis", "Madison",
    "Margaret", "Maria", "Marie", "Marilyn", "Mark", "Martha", "Mary", "Matthew", "Megan",
    "Melissa", "Michael", "Michelle", "Nancy", "Natalie", "Nathan", "Nicholas", "Nicole",
    "Noah", "Olivia", "Pamela", "Patricia", "Patrick", "Paul", "Peter", "Philip", "Rachel",
    "Ralph", "Randy", "Raymond", "Rebecca", "Richard", "Robert", "Roger", "Ronald", "Rose",
    "Roy", "Russell", "Ruth", "Ryan", "Samantha", "Samuel", "Sandra", "Sara", "Sarah", "Scott",
    "Sean", "Sharon", "Shirley", "Sophia", "Stephanie", "Stephen", "Steven", "Susan", "Teresa",
    "Terry", "Theresa", "Thomas", "Timothy", "Tyler", "Victoria", "Vincent", "Virginia",
    "Walter", "Wayne", "William", "Willie", "Zachary",
];

pub const LAST_NAMES: &[&str] = &[
    "Adams", "Alexander", "Allen", "Anderson", "Bailey", "Baker", "Barnes", "Bell", "Bennett",
    "Brooks", "Brown", "Bryant", "Butler", "Campbell", "Carter", "Clark", "Coleman", "Collins",
    "Cook", "Cooper", "Cox", "Davis", "Diaz", "Edwards", "Evans", "Fisher", "Flores", "Foster",
    "Garcia", "Gibson", "Gomez", "Gonzalez", "Gray", "Green", "Griffin", "Hall", "Harris",
    "Hayes", "Henderson", "Hernandez", "Hill", "Howard", "Hughes", "Jackson", "James", "Jenkins",
    "Johnson", "Jones", "Kelly", "King", "Lee", "Lewis", "Long", "Lopez", "Martin", "Martinez",
    "Miller", "Mitchell", "Moore", "Morgan", "Morris", "Murphy", "Myers", "Nelson", "Parker",
    "Patterson", "Perez", "Perry", "Peterson", "Phillips", "Powell", "Price", "Ramirez", "Reed",
    "Richardson", "Rivera", "Roberts", "Robinson", "Rodriguez", "Rogers", "Ross", "Russell",
    "Sanchez", "Sanders", "Scott", "Simmons", "Smith", "Stewart", "Sullivan", "Taylor", "Thomas",
    "Thompson", "Torres", "Turner", "Walker", "Ward", "Washington", "Watson", "White", "Williams",
    "Wilson", "Wood", "Wright", "Young",
];

pub const PREFIXES: &[&str] = &["Mr", "Mrs", "Ms", "Miss", "Dr"];

pub const SUFFIXES: &[&str] = &["Jr", "Sr", "II", "III", "IV", "PhD", "MD"];

pub const STREET_NAMES: &[&str] = &[
    "Acorn", "Amber", "Ash", "Aspen", "Bay", "Beech", "Birch", "Blossom", "Briar", "Brook",
    "Cedar", "Cherry", "Chestnut", "Church", "Clover", "College", "Cottage", "Creek", "Crystal",
    "Dale", "Deer", "Dogwood", "Eagle", "Elm", "Fairview", "Fawn", "Fern", "Forest", "Fox",
    "Garden", "Glen", "Grove", "Harbor", "Hawthorn", "Heather", "Hickory", "Highland", "Hill",
    "Holly", "Jackson", "Lake", "Larkhill", "Laurel", "Lincoln", "Linden", "Magnolia", "Main",
    "Maple", "Meadow", "Mill", "Oak", "Orchard", "Park", "Pine", "Pleasant", "Poplar", "Prospect",
    "Quail", "Ridge", "River", "Rose", "Sage", "Spring", "Spruce", "Summit", "Sunset", "Valley",
    "Walnut", "Washington", "Willow", "Windmill", "Woodland",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Avenue", "Boulevard", "Circle", "Court", "Crescent", "Drive", "Lane", "Parkway", "Place",
    "Road", "Row", "Square", "Street", "Terrace", "Trail", "Way",
];

pub const CITIES: &[&str] = &[
    "Aberdeen", "Albany", "Arlington", "Ashland", "Auburn", "Bedford", "Bristol", "Burlington",
    "Camden", "Canton", "Carlisle", "Centerville", "Chester", "Clayton", "Clinton", "Columbia",
    "Concord", "Dayton", "Dover", "Easton", "Fairfield", "Franklin", "Georgetown", "Greenville",
    "Hamilton", "Hanover", "Hudson", "Jackson", "Kingston", "Lancaster", "Lebanon", "Lexington",
    "Madison", "Manchester", "Marion", "Milford", "Milton", "Newport", "Oakland", "Oxford",
    "Plymouth", "Portland", "Richmond", "Riverside", "Salem", "Shelby", "Springfield", "Trenton",
    "Troy", "Union", "Vernon", "Warren", "Washington", "Winchester",
];

/// Corpus used for word and text synthesis.
pub const WORDS: &[&str] = &[
    "throw", "ball", "hat", "red", "worn", "list", "words", "computer", "in", "out", "hot",
    "cold", "warp", "speed", "captain", "assert", "hold", "room", "ship", "lost", "is",
    "television", "show", "about", "plane", "crash", "island", "monster", "trees", "banging",
    "smoke", "where", "are", "we", "was", "asked", "no", "rescue", "came", "build", "fire",
    "waited", "days", "moved", "to", "caves", "found", "with", "ghost", "dad", "in", "white",
    "rabbit", "lock", "discovered", "hatch", "with", "boon", "secretly", "hid", "it", "while",
    "trying", "to", "open", "it", "until", "sidekick", "died", "as", "sacrifice", "island",
    "demanded", "many", "had", "dreams", "or", "visions", "others", "came", "took", "people",
    "who", "are", "they", "what", "do", "they", "want", "light", "came", "on", "through",
    "window", "leader", "is", "a", "good", "man", "numbers", "in", "room", "enter", "keys",
    "computer", "end", "of", "world", "wicket", "magnetic", "pull", "shepherd", "always",
    "wrong", "much", "suspense", "what", "to", "do", "when", "it", "ends", "I", "will", "have",
    "to", "find", "something", "else", "to", "pique", "my", "interest", "or", "maybe", "write",
    "lots", "of", "code", "probably", "should", "have", "generated", "this", "text",
    "automatically", "so", "will", "from", "the", "web", "ending", "badly", "library",
    "handled", "books", "constantly", "headphones", "of", "ill", "on", "it's", "sill", "sits",
    "sofa",
];

pub const BUSINESS_TYPES: &[&str] = &[
    "Furnishings", "Bakery", "Accounting", "Textiles", "Manufacturing", "Industries",
    "Pro Services", "Landscaping", "Realty", "Travel", "Medical supplies", "Office supplies",
    "Insurance", "Software", "Motors", "Cafe", "Services", "Gymnasium", "Motor Services", "Signs",
    "Development", "Studios", "Engineering", "Development",
];

pub const EMAIL_HOSTS: &[&str] = &[
    "gma1l", "hotma1l", "yah00", "somema1l", "everyma1l", "ma1lbox", "b1zmail", "ma1l2u",
];

pub const TLDS: &[&str] = &["org", "net", "com", "biz", "us", "co.uk"];
