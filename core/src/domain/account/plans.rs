use crate::domain::account::entities::Plan;

const PLANS: &[(&str, &str, bool, &[&str])] = &[
    (
        "Iniciante",
        "R$ 11,90",
        false,
        &[
            "Biblioteca de receitas",
            "Escrever ingredientes",
            "Tirar foto para gerar receitas",
            "Suporte por email",
        ],
    ),
    (
        "Pro",
        "R$ 14,90",
        true,
        &[
            "Tudo do plano Iniciante",
            "Gravar áudio reconhecendo ingredientes",
            "Alimentar receitas autorais",
            "Acessar receitas autorais de outros usuários",
            "Ganhar e exibir insígnias",
            "Suporte prioritário",
        ],
    ),
];

pub fn plan_catalogue() -> Vec<Plan> {
    PLANS
        .iter()
        .map(|(name, price, popular, features)| Plan {
            name: name.to_string(),
            price: price.to_string(),
            period: "/mês".to_string(),
            popular: *popular,
            features: features.iter().map(|f| f.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_monthly_plans() {
        let plans = plan_catalogue();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].name, "Iniciante");
        assert_eq!(plans[0].price, "R$ 11,90");
        assert_eq!(plans[1].name, "Pro");
        assert_eq!(plans[1].price, "R$ 14,90");
        assert!(plans.iter().all(|p| p.period == "/mês"));
    }
}
