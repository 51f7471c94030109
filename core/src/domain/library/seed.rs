use chrono::{DateTime, Utc};

use crate::domain::{common::entities::app_errors::CoreError, library::entities::LibraryRecipe};

/// (title, ingredients, instructions, photo id, source)
const SAMPLE_RECIPES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Bolo de Chocolate Simples",
        "3 ovos, 2 xícaras de açúcar, 2 xícaras de farinha de trigo, 1 xícara de chocolate em pó, 1 xícara de óleo, 1 xícara de água quente, 1 colher de sopa de fermento",
        "1. Bata os ovos com o açúcar. 2. Adicione o óleo e misture. 3. Acrescente a farinha, o chocolate e misture. 4. Por último, adicione a água quente e o fermento. 5. Asse em forno preaquecido a 180°C por 40 minutos",
        "photo-1578985545062-69928b1d9587",
        "TudoGostoso",
    ),
    (
        "Arroz de Couve-Flor",
        "1 couve-flor média, 2 colheres de azeite, 2 dentes de alho, Sal e pimenta a gosto, Cheiro verde",
        "1. Rale a couve-flor no ralador grosso. 2. Aqueça o azeite e refogue o alho. 3. Adicione a couve-flor ralada. 4. Tempere com sal e pimenta. 5. Cozinhe por 5-7 minutos. 6. Finalize com cheiro verde",
        "photo-1512621776951-a57141f2eefd",
        "Panelinha",
    ),
    (
        "Frango Grelhado com Ervas",
        "4 filés de frango, 3 colheres de azeite, 2 dentes de alho, Alecrim fresco, Tomilho, Sal e pimenta",
        "1. Tempere o frango com sal, pimenta e alho. 2. Adicione as ervas frescas. 3. Deixe marinar por 30 minutos. 4. Grelhe em fogo médio por 6-8 minutos de cada lado. 5. Sirva quente",
        "photo-1598103442097-8b74394b95c6",
        "Paneloterapia",
    ),
    (
        "Salada Caesar Clássica",
        "Alface romana, 100g de parmesão, Croutons, 2 filés de frango, Molho caesar, Suco de limão",
        "1. Lave e corte a alface. 2. Grelhe o frango e corte em tiras. 3. Misture a alface com o molho caesar. 4. Adicione o frango, croutons e parmesão. 5. Finalize com limão",
        "photo-1546793665-c74683f339c1",
        "TudoGostoso",
    ),
    (
        "Risoto de Cogumelos",
        "2 xícaras de arroz arbóreo, 300g de cogumelos, 1 cebola, 1 litro de caldo de legumes, 100ml de vinho branco, Parmesão ralado, Manteiga",
        "1. Refogue a cebola na manteiga. 2. Adicione o arroz e torre levemente. 3. Acrescente o vinho e deixe evaporar. 4. Adicione o caldo aos poucos, mexendo sempre. 5. Refogue os cogumelos separadamente. 6. Misture ao risoto com parmesão",
        "photo-1476124369491-c4f9c6c6c6c6",
        "Panelinha",
    ),
    (
        "Brownie de Chocolate",
        "200g de chocolate meio amargo, 150g de manteiga, 3 ovos, 1 xícara de açúcar, 1/2 xícara de farinha, 1 pitada de sal",
        "1. Derreta o chocolate com a manteiga. 2. Bata os ovos com o açúcar. 3. Misture o chocolate derretido. 4. Adicione a farinha e o sal. 5. Asse a 180°C por 25-30 minutos",
        "photo-1607920591413-4ec007e70023",
        "Paneloterapia",
    ),
];

/// Starter content for an empty library.
pub fn sample_recipes(now: DateTime<Utc>) -> Result<Vec<LibraryRecipe>, CoreError> {
    SAMPLE_RECIPES
        .iter()
        .map(|(title, ingredients, instructions, photo_id, source)| {
            LibraryRecipe::new(
                title,
                ingredients,
                instructions,
                Some(format!(
                    "https://images.unsplash.com/{photo_id}?w=400&h=300&fit=crop"
                )),
                Some(source.to_string()),
                now,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_valid_samples() {
        let recipes = sample_recipes(Utc::now()).unwrap();
        assert_eq!(recipes.len(), 6);
        assert_eq!(recipes[0].title, "Bolo de Chocolate Simples");
        assert!(recipes.iter().all(|r| r.photo_url.is_some() && r.source.is_some()));
    }
}
