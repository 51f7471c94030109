/// Keyword to stock photo id. Order matters: the first keyword found in the
/// recipe name wins.
const KEYWORD_PHOTOS: &[(&str, &str)] = &[
    ("bolo", "photo-1578985545062-69928b1d9587"),
    ("torta", "photo-1464349095431-e9a21285b5f3"),
    ("pão", "photo-1509440159596-0249088772ff"),
    ("salada", "photo-1546793665-c74683f339c1"),
    ("sopa", "photo-1547592166-23ac45744acd"),
    ("massa", "photo-1621996346565-e3dbc646d9a9"),
    ("arroz", "photo-1516684732162-798a0062be99"),
    ("frango", "photo-1598103442097-8b74394b95c6"),
    ("carne", "photo-1588168333986-5078d3ae3976"),
    ("peixe", "photo-1519708227418-c8fd9a32b7a2"),
    ("pizza", "photo-1513104890138-7c749659a591"),
    ("hamburguer", "photo-1568901346375-23c9450c58cd"),
    ("sanduiche", "photo-1528735602780-2552fd46c7af"),
    ("smoothie", "photo-1505252585461-04db1eb84625"),
    ("suco", "photo-1600271886742-f049cd451bba"),
];

const DEFAULT_PHOTO: &str = "photo-1495521821757-a1efb6729352";

pub fn recipe_image_url(name: &str) -> String {
    let name = name.to_lowercase();
    let photo_id = KEYWORD_PHOTOS
        .iter()
        .find(|(keyword, _)| name.contains(keyword))
        .map(|(_, photo_id)| *photo_id)
        .unwrap_or(DEFAULT_PHOTO);

    format!("https://images.unsplash.com/{photo_id}?w=400&h=300&fit=crop")
}
