//! Lead-capture form submissions.
//!
//! Field names here are the wire contract of the CMS collections the
//! forms post into; they are Portuguese because the backend schema is.

use serde::Serialize;

use super::Id;

/// A contact-form message.
#[derive(Debug, Clone, Serialize)]
pub struct ContactSubmission {
    pub nome: String,
    pub email: String,
    pub telefone: String,
    pub assunto: String,
    pub mensagem: String,
    pub site: Id,
}

/// A newsletter signup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSubmission {
    pub nome_completo: String,
    pub email: String,
    pub celular: String,
    pub newsletter_accepted: bool,
    pub site: Id,
}

/// A union-membership application, including the digital signature
/// captured on the form (a data URL of the signature image).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipSubmission {
    pub nome_completo: String,
    pub cpf: String,
    pub email: String,
    pub celular: String,
    pub data_nascimento: String,
    pub empresa_veiculo: String,
    pub cargo_funcao: String,
    pub assinatura_digital: String,
    pub declaracao_lida: bool,
    pub site: Id,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_contact_wire_names() {
        let submission = ContactSubmission {
            nome: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            telefone: "(92) 98888-7777".to_string(),
            assunto: "Dúvida".to_string(),
            mensagem: "Olá".to_string(),
            site: Id::Number(1),
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["nome"], json!("Ana"));
        assert_eq!(value["mensagem"], json!("Olá"));
        assert_eq!(value["site"], json!(1));
    }

    #[test]
    fn test_membership_wire_names() {
        let submission = MembershipSubmission {
            nome_completo: "Ana Souza".to_string(),
            cpf: "123.456.789-01".to_string(),
            email: "ana@example.com".to_string(),
            celular: "(92) 98888-7777".to_string(),
            data_nascimento: "1990-05-01".to_string(),
            empresa_veiculo: "Bebidas Amazonas".to_string(),
            cargo_funcao: "Operadora".to_string(),
            assinatura_digital: "data:image/png;base64,AAAA".to_string(),
            declaracao_lida: true,
            site: Id::Number(1),
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["nomeCompleto"], json!("Ana Souza"));
        assert_eq!(value["dataNascimento"], json!("1990-05-01"));
        assert_eq!(value["assinaturaDigital"], json!("data:image/png;base64,AAAA"));
        assert_eq!(value["declaracaoLida"], json!(true));
    }
}
