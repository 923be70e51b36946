use std::collections::HashSet;

use crate::domain::pet::entities::Species;

/// Reference breed names accepted for `dog` and `cat` records.
///
/// Registries compare names after [`normalize_breed`], so the spelling here
/// only matters for display.
#[derive(Debug, Clone)]
pub struct BreedRegistry {
    dog_breeds: HashSet<String>,
    cat_breeds: HashSet<String>,
}

impl BreedRegistry {
    pub fn new<D, C>(dog_breeds: D, cat_breeds: C) -> Self
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            dog_breeds: dog_breeds
                .into_iter()
                .map(|breed| normalize_breed(breed.as_ref()))
                .collect(),
            cat_breeds: cat_breeds
                .into_iter()
                .map(|breed| normalize_breed(breed.as_ref()))
                .collect(),
        }
    }

    /// Checks a raw breed against the set for a raw species.
    ///
    /// Unknown species never match.
    pub fn contains(&self, species: &str, breed: &str) -> bool {
        let Some(species) = Species::from_normalized(&normalize_species(species)) else {
            return false;
        };

        let breeds = match species {
            Species::Dog => &self.dog_breeds,
            Species::Cat => &self.cat_breeds,
        };

        breeds.contains(&normalize_breed(breed))
    }

    pub fn len(&self, species: Species) -> usize {
        match species {
            Species::Dog => self.dog_breeds.len(),
            Species::Cat => self.cat_breeds.len(),
        }
    }
}

impl Default for BreedRegistry {
    fn default() -> Self {
        Self::new(DOG_BREEDS, CAT_BREEDS)
    }
}

/// Trims, then upper-cases the first letter of every run of letters and
/// lower-cases the rest: `"  golden RETRIEVER "` becomes `"Golden Retriever"`,
/// `"shar-pei"` becomes `"Shar-Pei"`.
pub fn normalize_breed(breed: &str) -> String {
    let mut normalized = String::with_capacity(breed.len());
    let mut in_word = false;

    for ch in breed.trim().chars() {
        if ch.is_alphabetic() {
            if in_word {
                normalized.extend(ch.to_lowercase());
            } else {
                normalized.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            normalized.push(ch);
            in_word = false;
        }
    }

    normalized
}

pub fn normalize_species(species: &str) -> String {
    species.trim().to_lowercase()
}

pub const DOG_BREEDS: &[&str] = &[
    "Affenpinscher",
    "Afghan Hound",
    "African Hunting Dog",
    "Airedale Terrier",
    "Akbash Dog",
    "Akita",
    "Alapaha Blue Blood Bulldog",
    "Alaskan Husky",
    "Alaskan Malamute",
    "American Bulldog",
    "American Bully",
    "American Eskimo Dog",
    "American Eskimo Dog (Miniature)",
    "American Foxhound",
    "American Pit Bull Terrier",
    "American Staffordshire Terrier",
    "American Water Spaniel",
    "Anatolian Shepherd Dog",
    "Appenzeller Sennenhund",
    "Australian Cattle Dog",
    "Australian Kelpie",
    "Australian Shepherd",
    "Australian Terrier",
    "Azawakh",
    "Barbet",
    "Basenji",
    "Basset Bleu de Gascogne",
    "Basset Hound",
    "Beagle",
    "Bearded Collie",
    "Beauceron",
    "Bedlington Terrier",
    "Belgian Malinois",
    "Belgian Tervuren",
    "Bernese Mountain Dog",
    "Bichon Frise",
    "Black and Tan Coonhound",
    "Bloodhound",
    "Bluetick Coonhound",
    "Boerboel",
    "Border Collie",
    "Border Terrier",
    "Boston Terrier",
    "Bouvier des Flandres",
    "Boxer",
    "Boykin Spaniel",
    "Bracco Italiano",
    "Briard",
    "Brittany",
    "Bull Terrier",
    "Bullmastiff",
    "Cairn Terrier",
    "Cane Corso",
    "Cardigan Welsh Corgi",
    "Catahoula Leopard Dog",
    "Caucasian Shepherd (Ovcharka)",
    "Cavalier King Charles Spaniel",
    "Chesapeake Bay Retriever",
    "Chinese Crested",
    "Chinese Shar-Pei",
    "Chinook",
    "Chow Chow",
    "Clumber Spaniel",
    "Cocker Spaniel",
    "Cocker Spaniel (American)",
    "Coton de Tulear",
    "Dalmatian",
    "Doberman Pinscher",
    "Dogo Argentino",
    "Dutch Shepherd",
    "English Setter",
    "English Shepherd",
    "English Springer Spaniel",
    "English Toy Spaniel",
    "English Toy Terrier",
    "Eurasier",
    "Field Spaniel",
    "Finnish Lapphund",
    "Finnish Spitz",
    "French Bulldog",
    "German Pinscher",
    "German Shepherd Dog",
    "German Shorthaired Pointer",
    "Giant Schnauzer",
    "Glen of Imaal Terrier",
    "Golden Retriever",
    "Gordon Setter",
    "Great Dane",
    "Great Pyrenees",
    "Greyhound",
    "Griffon Bruxellois",
    "Harrier",
    "Havanese",
    "Irish Setter",
    "Irish Terrier",
    "Irish Wolfhound",
    "Italian Greyhound",
    "Japanese Chin",
    "Japanese Spitz",
    "Keeshond",
    "Komondor",
    "Kooikerhondje",
    "Kuvasz",
    "Labrador Retriever",
    "Lagotto Romagnolo",
    "Lancashire Heeler",
    "Leonberger",
    "Lhasa Apso",
    "Maltese",
    "Miniature American Shepherd",
    "Miniature Pinscher",
    "Miniature Schnauzer",
    "Mix Breed",
    "Newfoundland",
    "Norfolk Terrier",
    "Norwich Terrier",
    "Nova Scotia Duck Tolling Retriever",
    "Old English Sheepdog",
    "Olde English Bulldogge",
    "Papillon",
    "Pekingese",
    "Pembroke Welsh Corgi",
    "Perro de Presa Canario",
    "Pharaoh Hound",
    "Plott",
    "Pomeranian",
    "Poodle (Miniature)",
    "Poodle (Toy)",
    "Pug",
    "Puli",
    "Pumi",
    "Rat Terrier",
    "Redbone Coonhound",
    "Rhodesian Ridgeback",
    "Rottweiler",
    "Russian Toy",
    "Saint Bernard",
    "Saluki",
    "Samoyed",
    "Schipperke",
    "Scottish Deerhound",
    "Scottish Terrier",
    "Shetland Sheepdog",
    "Shiba Inu",
    "Shih Tzu",
    "Shiloh Shepherd",
    "Siberian Husky",
    "Silky Terrier",
    "Smooth Fox Terrier",
    "Soft Coated Wheaten Terrier",
    "Spanish Water Dog",
    "Spinone Italiano",
    "Staffordshire Bull Terrier",
    "Standard Schnauzer",
    "Swedish Vallhund",
    "Thai Ridgeback",
    "Tibetan Mastiff",
    "Tibetan Spaniel",
    "Tibetan Terrier",
    "Toy Fox Terrier",
    "Treeing Walker Coonhound",
    "Vizsla",
    "Weimaraner",
    "Welsh Springer Spaniel",
    "West Highland White Terrier",
    "Whippet",
    "White Shepherd",
    "Wire Fox Terrier",
    "Wirehaired Pointing Griffon",
    "Wirehaired Vizsla",
    "Xoloitzcuintli",
    "Yorkshire Terrier",
];

pub const CAT_BREEDS: &[&str] = &[
    "Abyssinian",
    "Aegean",
    "American Bobtail",
    "American Curl",
    "American Shorthair",
    "American Wirehair",
    "Arabian Mau",
    "Australian Mist",
    "Balinese",
    "Bambino",
    "Bengal",
    "Birman",
    "Bombay",
    "British Longhair",
    "British Shorthair",
    "Burmese",
    "Burmilla",
    "California Spangled",
    "Chantilly-Tiffany",
    "Chartreux",
    "Chausie",
    "Cheetoh",
    "Colorpoint Shorthair",
    "Cornish Rex",
    "Cymric",
    "Cyprus",
    "Devon Rex",
    "Donskoy",
    "Dragon Li",
    "Egyptian Mau",
    "European Burmese",
    "Exotic Shorthair",
    "Havana Brown",
    "Himalayan",
    "Japanese Bobtail",
    "Javanese",
    "Khao Manee",
    "Korat",
    "Kurilian",
    "LaPerm",
    "Maine Coon",
    "Malayan",
    "Manx",
    "Mix Breed",
    "Munchkin",
    "Nebelung",
    "Norwegian Forest Cat",
    "Ocicat",
    "Oriental",
    "Persian",
    "Pixie-bob",
    "Ragamuffin",
    "Ragdoll",
    "Russian Blue",
    "Savannah",
    "Scottish Fold",
    "Selkirk Rex",
    "Siamese",
    "Siberian",
    "Singapura",
    "Snowshoe",
    "Somali",
    "Sphynx",
    "Tonkinese",
    "Toyger",
    "Turkish Angora",
    "Turkish Van",
    "York Chocolate",
];
