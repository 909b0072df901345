//! The proposal form content: one flat value object of named text fields.

use serde::{Deserialize, Serialize};

/// Textual data for one commercial proposal document.
///
/// Every field is a free-form string. Multi-item fields (objectives,
/// deliverables, ...) use newline as the item separator -- that is a
/// presentational convention, not a structural list. Empty strings are
/// valid everywhere; the template renderer substitutes a fixed
/// placeholder for them.
///
/// Serde names follow the original export file format (camelCase,
/// Portuguese), so backups interchange with files produced by earlier
/// versions of the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalContent {
    /// Project or product name. Doubles as the document title and the
    /// source of exported artifact filenames.
    pub nome_projeto: String,
    /// Free-form project description (paragraph field).
    pub descricao_projeto: String,
    /// Project objectives, one per line.
    pub objetivo_projeto: String,
    /// Target client profile, one item per line.
    pub perfil_cliente: String,
    /// Specific client needs, one item per line.
    pub necessidades_cliente: String,
    /// Sectors of activity, one item per line.
    pub setores_atuacao: String,
    /// Methodology steps, one per line.
    pub metodologia: String,
    /// Deliverables, one per line.
    pub entregaveis: String,
    /// Success indicators, one per line.
    pub indicadores_sucesso: String,
    /// Tangible client benefits, one per line.
    pub beneficios_tangiveis: String,
    /// Intangible client benefits, one per line.
    pub beneficios_intangiveis: String,
    /// Competitive strengths, one per line.
    pub pontos_fortes: String,
    /// Success stories (paragraph field).
    pub casos_sucesso: String,
    /// Pricing model (paragraph field).
    pub modelo_precificacao: String,
}

impl Default for ProposalContent {
    /// Seeded example content: a tax-thesis recovery proposal, so a
    /// fresh session previews a fully populated document.
    fn default() -> Self {
        Self {
            nome_projeto: "Recuperação de ITCMD Pago Indevidamente sobre VGBL/PGBL".into(),
            descricao_projeto: "Análise e revisão de teses tributárias aplicáveis aos processos \
                 do cliente, visando otimizar a carga tributária e identificar oportunidades de \
                 recuperação de créditos."
                .into(),
            objetivo_projeto: "Reduzir a carga tributária do cliente.\n\
                 Maximizar a eficiência fiscal."
                .into(),
            perfil_cliente: "Empresas de médio e grande porte no setor industrial.\n\
                 Pessoas físicas com patrimônio elevado."
                .into(),
            necessidades_cliente: "Necessidade de otimização fiscal.\n\
                 Compliance tributário.\n\
                 Recuperação de valores pagos indevidamente."
                .into(),
            setores_atuacao: "Indústria.\nComércio.\nServiços.\nSetor financeiro.".into(),
            metodologia: "Análise preliminar de processos atuais.\n\
                 Elaboração de diagnóstico.\n\
                 Apresentação de propostas de melhoria.\n\
                 Implementação das soluções jurídicas."
                .into(),
            entregaveis: "Relatório de diagnóstico.\n\
                 Propostas de teses tributárias.\n\
                 Plano de ação.\n\
                 Pareceres jurídicos."
                .into(),
            indicadores_sucesso: "Redução percentual da carga tributária.\n\
                 Quantidade de créditos tributários recuperados.\n\
                 Satisfação do cliente.\n\
                 Número de processos finalizados com êxito."
                .into(),
            beneficios_tangiveis: "Economia financeira.\n\
                 Recuperação de créditos.\n\
                 Redução de passivos tributários.\n\
                 Aumento do fluxo de caixa."
                .into(),
            beneficios_intangiveis: "Segurança jurídica.\n\
                 Conformidade com a legislação.\n\
                 Melhoria na gestão fiscal.\n\
                 Reputação e credibilidade."
                .into(),
            pontos_fortes: "Experiência comprovada.\n\
                 Equipe especializada.\n\
                 Metodologia eficaz.\n\
                 Atendimento personalizado."
                .into(),
            casos_sucesso: "Recuperação de R$ 5 milhões em ITCMD para cliente do setor \
                 imobiliário.\n\
                 Redução de 30% da carga tributária anual para empresa de serviços."
                .into(),
            modelo_precificacao: "Honorários de êxito calculados sobre o benefício econômico \
                 efetivamente obtido pelo cliente.\n\
                 Possibilidade de honorários fixos para análise inicial e diagnóstico."
                .into(),
        }
    }
}

impl ProposalContent {
    /// An all-empty content snapshot. Every field renders its
    /// placeholder; useful as a "new document" starting point.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            nome_projeto: String::new(),
            descricao_projeto: String::new(),
            objetivo_projeto: String::new(),
            perfil_cliente: String::new(),
            necessidades_cliente: String::new(),
            setores_atuacao: String::new(),
            metodologia: String::new(),
            entregaveis: String::new(),
            indicadores_sucesso: String::new(),
            beneficios_tangiveis: String::new(),
            beneficios_intangiveis: String::new(),
            pontos_fortes: String::new(),
            casos_sucesso: String::new(),
            modelo_precificacao: String::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn default_content_is_fully_populated() {
        let content = ProposalContent::default();
        assert!(content.nome_projeto.contains("ITCMD"));
        assert!(!content.modelo_precificacao.is_empty());
    }

    #[test]
    fn serde_uses_camel_case_keys() {
        let json = serde_json::to_string(&ProposalContent::empty()).unwrap();
        assert!(json.contains("\"nomeProjeto\""));
        assert!(json.contains("\"modeloPrecificacao\""));
        assert!(!json.contains("nome_projeto"));
    }

    #[test]
    fn multi_item_defaults_use_newline_separators() {
        let content = ProposalContent::default();
        assert!(content.setores_atuacao.lines().count() >= 4);
    }
}
