//! Local name/email search over the cached user list.

use crate::user::User;

/// Whether `user` matches the search `term`.
///
/// A match is a case-insensitive substring of the name or the email. The
/// empty term matches everyone.
///
/// # Examples
/// ```
/// use admin_panel::{User, matches_search};
///
/// let ann = User {
///     id: 1,
///     name: "Ann".into(),
///     email: "ann@x.com".into(),
///     password: "Passw0rd!".into(),
/// };
/// assert!(matches_search(&ann, "X.CO"));
/// assert!(!matches_search(&ann, "bob"));
/// ```
#[must_use]
pub fn matches_search(user: &User, term: &str) -> bool {
    let needle = term.to_lowercase();
    user.name.to_lowercase().contains(&needle) || user.email.to_lowercase().contains(&needle)
}

/// Users matching `term`, in list order.
#[must_use]
pub fn filter_users<'a>(users: &'a [User], term: &str) -> Vec<&'a User> {
    users
        .iter()
        .filter(|user| matches_search(user, term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn user(id: i32, name: &str, email: &str) -> User {
        User {
            id,
            name: name.to_owned(),
            email: email.to_owned(),
            password: "Passw0rd!".to_owned(),
        }
    }

    #[fixture]
    fn users() -> Vec<User> {
        vec![
            user(1, "Ann Lee", "ann@x.com"),
            user(2, "Bob", "bob@corp.io"),
            user(3, "Carla", "carla@X.com"),
        ]
    }

    fn ids(matched: &[&User]) -> Vec<i32> {
        matched.iter().map(|user| user.id).collect()
    }

    #[rstest]
    #[case("", &[1, 2, 3])]
    #[case("ann", &[1])]
    #[case("LEE", &[1])]
    #[case("x.com", &[1, 3])]
    #[case("CORP", &[2])]
    #[case("zed", &[])]
    fn filter_matches_name_or_email(
        users: Vec<User>,
        #[case] term: &str,
        #[case] expected: &[i32],
    ) {
        assert_eq!(ids(&filter_users(&users, term)), expected);
    }

    #[rstest]
    fn filter_keeps_list_order(users: Vec<User>) {
        let reversed: Vec<User> = users.into_iter().rev().collect();
        assert_eq!(ids(&filter_users(&reversed, "o")), [3, 2, 1]);
    }
}
