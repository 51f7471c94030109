use crate::domain::{
    common::{entities::app_errors::CoreError, non_blank},
    suggestion::entities::{CompletionRequest, ImageReference},
};

pub const GENERATION_SYSTEM_INSTRUCTION: &str = "Você é um chef especializado em criar receitas criativas e práticas. Sempre retorne respostas em formato JSON válido.";
pub const SEARCH_SYSTEM_INSTRUCTION: &str = "Você é um chef especializado que conhece receitas de diversos sites de culinária. Sempre retorne respostas em formato JSON válido.";

pub const GENERATION_TEMPERATURE: f32 = 0.8;
pub const GENERATION_MAX_TOKENS: u32 = 2000;
pub const IMAGE_GENERATION_MAX_TOKENS: u32 = 2000;
pub const SEARCH_TEMPERATURE: f32 = 0.9;
pub const SEARCH_MAX_TOKENS: u32 = 3000;

const RECIPE_SHAPE: &str = r#"{
  "nome": "Nome da receita",
  "ingredientes": ["ingrediente 1", "ingrediente 2", ...],
  "modo_preparo": ["passo 1", "passo 2", ...],
  "tempo_preparo": "30 minutos",
  "dificuldade": "Fácil"
}"#;

pub fn generation_prompt(ingredients: Option<&str>, has_image: bool) -> Result<String, CoreError> {
    let ingredients = non_blank(ingredients);

    if has_image {
        let mut prompt = String::from(
            "Identifique os ingredientes nesta imagem e sugira 3 receitas diferentes que podem ser feitas com eles. \
             Para cada receita, retorne em formato JSON com: nome, ingredientes (array), modo_preparo (array de passos), tempo_preparo, dificuldade.",
        );
        if let Some(extra) = ingredients {
            prompt.push_str(&format!(
                "\n\nO usuário também informou os seguintes ingredientes: {extra}"
            ));
        }
        return Ok(prompt);
    }

    let Some(ingredients) = ingredients else {
        return Err(CoreError::InvalidRequest(
            "Ingredientes ou imagem são necessários".to_string(),
        ));
    };

    Ok(format!(
        "Com base nos seguintes ingredientes: {ingredients}\n\n\
         Sugira 3 receitas diferentes e criativas que podem ser feitas com esses ingredientes.\n\n\
         Para cada receita, retorne em formato JSON com a seguinte estrutura:\n\
         {RECIPE_SHAPE}\n\n\
         Retorne um array com as 3 receitas."
    ))
}

pub fn search_prompt(query: &str) -> Result<String, CoreError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CoreError::InvalidRequest(
            "Query de busca é necessária".to_string(),
        ));
    }

    Ok(format!(
        "Você é um assistente especializado em culinária. Gere 6 receitas diferentes relacionadas a: \"{query}\".\n\n\
         Para cada receita, retorne em formato JSON com a seguinte estrutura:\n\
         {{\n\
         \x20 \"titulo\": \"Nome da receita\",\n\
         \x20 \"ingredientes\": \"Lista de ingredientes separados por vírgula\",\n\
         \x20 \"modo_preparo\": \"Modo de preparo detalhado em texto corrido\",\n\
         \x20 \"foto_url\": \"URL de uma foto representativa do Unsplash (use https://images.unsplash.com/photo-[ID]?w=400&h=300&fit=crop)\",\n\
         \x20 \"fonte\": \"Nome de um site de culinária famoso (TudoGostoso, Panelinha, Paneloterapia, etc)\"\n\
         }}\n\n\
         Retorne um array JSON com as 6 receitas. Seja criativo e varie as receitas."
    ))
}

/// Full request for the generation path. Image requests carry no system
/// instruction and keep the provider's default temperature.
pub fn generation_request(
    ingredients: Option<&str>,
    image: Option<ImageReference>,
) -> Result<CompletionRequest, CoreError> {
    let prompt = generation_prompt(ingredients, image.is_some())?;

    Ok(match image {
        Some(image) => CompletionRequest {
            system_instruction: None,
            prompt,
            image: Some(image),
            temperature: None,
            max_tokens: IMAGE_GENERATION_MAX_TOKENS,
        },
        None => CompletionRequest {
            system_instruction: Some(GENERATION_SYSTEM_INSTRUCTION.to_string()),
            prompt,
            image: None,
            temperature: Some(GENERATION_TEMPERATURE),
            max_tokens: GENERATION_MAX_TOKENS,
        },
    })
}

pub fn search_request(query: &str) -> Result<CompletionRequest, CoreError> {
    Ok(CompletionRequest {
        system_instruction: Some(SEARCH_SYSTEM_INSTRUCTION.to_string()),
        prompt: search_prompt(query)?,
        image: None,
        temperature: Some(SEARCH_TEMPERATURE),
        max_tokens: SEARCH_MAX_TOKENS,
    })
}
