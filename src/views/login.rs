use maud::{html, Markup};

fn login_form(role_key: &str, title: &str) -> Markup {
    html! {
        div.col-sm {
            h2 { (title) }
            form data-testid={ "form-" (role_key) } method="post" {
                div.form-group {
                    label for={ (role_key) "-email-input" } { "Votre email" }
                    input.form-control type="email" name="email" required
                        data-testid={ (role_key) "-email-input" }
                        id={ (role_key) "-email-input" }
                        placeholder="johndoe@email.com";
                }
                div.form-group {
                    label for={ (role_key) "-password-input" } { "Mot de passe" }
                    input.form-control type="password" name="password" required
                        data-testid={ (role_key) "-password-input" }
                        id={ (role_key) "-password-input" }
                        placeholder="******";
                }
                input type="hidden" name="type" value=(title);
                button.btn.btn-primary type="submit" data-testid={ (role_key) "-login-button" } { "Se connecter" }
            }
        }
    }
}

/// 登录页: 员工与管理员两个表单
pub fn login_ui() -> String {
    html! {
        div.login-page {
            div.login-title { h1 { "Billed" } }
            div.container {
                div.row {
                    (login_form("employee", "Employé"))
                    (login_form("admin", "Administration"))
                }
            }
        }
    }
    .into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_forms_are_rendered() {
        let html = login_ui();
        assert!(html.contains(r#"data-testid="form-employee""#));
        assert!(html.contains(r#"data-testid="form-admin""#));
        assert!(!html.contains("vertical-navbar"));
    }
}
