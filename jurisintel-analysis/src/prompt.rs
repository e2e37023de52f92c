//! Prompt template handling
//!
//! Two prompt surfaces live here: the externalized analysis template sent to
//! the AI service, and the static deep-research prompt generator that users
//! copy into external research tools.

use jurisintel_core::{validation_error, ErrorContext, JurisError, JurisResult};
use std::path::Path;
use tracing::{debug, error};

/// Placeholder token substituted by the research theme.
///
/// The substitution is literal and unescaped; a theme containing the
/// placeholder syntax itself is not specially handled.
pub const THEME_PLACEHOLDER: &str = "${theme}";

/// Externalized analysis prompt template.
#[derive(Debug)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Load the template from a file path.
    pub async fn load<P: AsRef<Path>>(path: P) -> JurisResult<Self> {
        let path = path.as_ref();
        let template = tokio::fs::read_to_string(path).await.map_err(|e| {
            error!(path = %path.display(), error = %e, "Failed to load prompt template");
            JurisError::Template {
                message: format!("Failed to load prompt template from {}: {}", path.display(), e),
                source: Some(Box::new(e)),
                context: ErrorContext::new("prompt")
                    .with_operation("load_template")
                    .with_suggestion("Check prompt.template_path in the configuration"),
            }
        })?;

        debug!(path = %path.display(), bytes = template.len(), "Loaded prompt template");
        Ok(Self { template })
    }

    /// Build a template directly from a string (mainly for tests).
    pub fn from_template<S: Into<String>>(template: S) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render the template for a theme.
    ///
    /// Replaces the first occurrence of the placeholder only, matching the
    /// single-token contract of the template.
    pub fn render(&self, theme: &str) -> String {
        self.template.replacen(THEME_PLACEHOLDER, theme, 1)
    }
}

/// Build the deep-research prompt for external research assistants.
///
/// `prioritized_courts` is an optional comma-separated list of state court
/// acronyms (e.g. "TJSP, TJRJ") focusing the jurisprudence search; without
/// it the prompt targets state courts in general.
pub fn build_research_prompt(
    theme: &str,
    prioritized_courts: Option<&str>,
) -> JurisResult<String> {
    let theme = theme.trim();
    if theme.is_empty() {
        return Err(validation_error!(
            "Por favor, insira um tema na barra de pesquisa principal para gerar um prompt relevante.",
            "theme",
            "prompt"
        ));
    }

    let tj_focus = match prioritized_courts.map(str::trim).filter(|c| !c.is_empty()) {
        Some(courts) => format!("Nos seguintes Tribunais de Justiça: {}.", courts),
        None => "Em diversos Tribunais de Justiça estaduais.".to_string(),
    };

    let prompt = format!(
        r#"Com base no tema jurídico: "{theme}", realize uma pesquisa aprofundada e abrangente.

**Objetivos Principais da Pesquisa:**
1.  Identificar jurisprudência relevante (acórdãos, decisões monocráticas) sobre o tema. Concentre-se {tj_focus}
2.  Encontrar artigos doutrinários, capítulos de livros, teses acadêmicas (mestrado/doutorado), e outras publicações especializadas que analisem criticamente o tema "{theme}".
3.  Priorizar fontes verificáveis, de alta credibilidade e, sempre que possível, com acesso ao texto integral.
4.  Analisar a evolução do entendimento jurisprudencial e doutrinário sobre o tema.
5.  Identificar possíveis divergências jurisprudenciais, tanto entre diferentes tribunais quanto internamente (e.g., entre Câmaras/Turmas do mesmo TJ).
6.  Coletar argumentos jurídicos favoráveis e desfavoráveis relacionados ao tema, com suas respectivas fundamentações.

**Fontes Sugeridas para Consulta (lista não exaustiva):**
*   Portais oficiais dos Tribunais de Justiça (especialmente os priorizados, se houver).
*   Bases de dados jurisprudenciais e legislativas (ex: Jusbrasil, VLex, LexML Brasil, repositórios de súmulas).
*   Portais de notícias e revistas jurídicas especializadas (ex: Conjur, Migalhas, JOTA, Revista dos Tribunais online).
*   Repositórios acadêmicos e bibliotecas digitais (ex: SciELO, Google Scholar, Biblioteca Digital Brasileira de Teses e Dissertações - BDTD, repositórios institucionais de universidades).
*   Catálogos de editoras jurídicas e livrarias online para identificar obras doutrinárias relevantes.

**Formato Desejado para a Resposta:**
*   **Para cada Julgado Relevante:**
    *   Tribunal de origem (e.g., TJSP, TJRJ).
    *   Número do processo.
    *   Órgão julgador (e.g., Câmara, Turma).
    *   Nome do(a) Relator(a).
    *   Data de julgamento e data de publicação.
    *   Ementa completa.
    *   Link direto para o inteiro teor do acórdão/decisão (se publicamente disponível).
    *   Citação no formato ABNT (ou todos os elementos necessários para montá-la). Se um grande volume de julgados for retornado, fornecer ao menos as referências essenciais (Tribunal, tipo de recurso, número, Relator, data) para permitir a busca posterior.
*   **Para Artigos, Livros e Outras Publicações:**
    *   Título completo da obra/artigo.
    *   Nome(s) do(s) autor(es).
    *   Veículo de publicação (e.g., nome da revista, título do livro, anais de congresso, site).
    *   Editora (se livro).
    *   Ano de publicação.
    *   Link direto para acesso ao texto completo (se disponível e de acesso aberto ou mediante assinatura).
    *   Citação no formato ABNT.

**Considerações Adicionais para a Análise:**
*   Contextualizar as decisões e publicações encontradas.
*   Sintetizar os principais entendimentos e teses sobre "{theme}".
*   Apontar tendências atuais ou mudanças significativas na abordagem do tema.

Por favor, organize a resposta de forma clara e estruturada."#
    );

    Ok(prompt.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn load_fails_with_template_error_for_missing_file() {
        let err = PromptTemplate::load("/nonexistent/prompt.md").await.unwrap_err();
        assert!(matches!(err, JurisError::Template { .. }));
        assert_eq!(
            err.user_message(),
            "Não foi possível carregar o modelo de prompt para a análise jurídica."
        );
    }

    #[tokio::test]
    async fn load_reads_template_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.md");
        tokio::fs::write(&path, "Analise o tema ${theme} em detalhe.")
            .await
            .unwrap();

        let template = PromptTemplate::load(&path).await.unwrap();
        assert_eq!(
            template.render("usucapião"),
            "Analise o tema usucapião em detalhe."
        );
    }

    #[test]
    fn render_substitutes_only_the_first_occurrence() {
        let template = PromptTemplate::from_template("${theme} e novamente ${theme}");
        assert_eq!(template.render("posse"), "posse e novamente ${theme}");
    }

    #[test]
    fn render_does_not_escape_the_theme() {
        let template = PromptTemplate::from_template("Tema: ${theme}");
        assert_eq!(template.render("${theme}"), "Tema: ${theme}");
    }

    #[test]
    fn research_prompt_rejects_blank_theme() {
        let err = build_research_prompt("   ", None).unwrap_err();
        assert!(matches!(err, JurisError::Validation { .. }));
    }

    #[test]
    fn research_prompt_focuses_prioritized_courts() {
        let prompt = build_research_prompt("dano moral", Some("TJSP, TJRJ")).unwrap();
        assert!(prompt.contains("Nos seguintes Tribunais de Justiça: TJSP, TJRJ."));
        assert!(prompt.contains("\"dano moral\""));
    }

    #[test]
    fn research_prompt_defaults_to_generic_state_courts() {
        let prompt = build_research_prompt("dano moral", Some("  ")).unwrap();
        assert!(prompt.contains("Em diversos Tribunais de Justiça estaduais."));
    }
}
