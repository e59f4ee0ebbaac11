//! [`Query`] collection related to the multiple [`Launch`]es.

use common::{
    operations::{By, Select},
    pagination,
};
use tracerr::Traced;

use crate::{
    domain::Launch,
    infra::{catalog, Catalog},
    read, Service,
};

use super::Query;

/// Queries a [`read::launch::list::Page`] of [`Launch`]es, the most recent
/// first.
#[derive(Clone, Debug, Default)]
pub struct List(pub read::launch::list::Arguments);

impl<Db, Cat> Query<List> for Service<Db, Cat>
where
    Cat: Catalog<
        Select<By<Vec<Launch>, ()>>,
        Ok = Vec<Launch>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = read::launch::list::Page;
    type Err = Traced<catalog::Error>;

    async fn execute(&self, List(args): List) -> Result<Self::Ok, Self::Err> {
        let all = self
            .catalog()
            .execute(Select(By::new(())))
            .await
            .map_err(tracerr::wrap!())?;

        Ok(pagination::paginate(all, &args))
    }
}

#[cfg(test)]
mod spec {
    use common::Page;

    use crate::{
        query::{launch::ById, Query as _},
        read::launch::list::Arguments,
        test_support::{launch, service},
    };

    use super::List;

    fn args(page_size: usize, after: Option<&str>) -> List {
        List(Arguments {
            page_size,
            after: after.map(Into::into),
        })
    }

    #[tokio::test]
    async fn lists_launches_from_catalog() {
        let svc = service(vec![launch(999, Some("foo"))]);

        let page = svc.execute(List::default()).await.unwrap();

        assert_eq!(
            page,
            Page {
                nodes: vec![launch(999, Some("foo"))],
                cursor: Some("foo".into()),
                has_more: false,
            },
        );
    }

    #[tokio::test]
    async fn respects_page_size() {
        let svc =
            service(vec![launch(1, Some("foo")), launch(999, Some("bar"))]);

        let page = svc.execute(args(1, None)).await.unwrap();

        assert_eq!(
            page,
            Page {
                nodes: vec![launch(999, Some("bar"))],
                cursor: Some("bar".into()),
                has_more: true,
            },
        );
    }

    #[tokio::test]
    async fn zero_page_size_returns_empty() {
        let svc =
            service(vec![launch(1, Some("foo")), launch(999, Some("bar"))]);

        let page = svc.execute(args(0, None)).await.unwrap();

        assert_eq!(page, Page::empty());
    }

    #[tokio::test]
    async fn respects_cursor() {
        let svc = service(vec![launch(1, Some("a")), launch(999, Some("b"))]);

        let page = svc.execute(args(20, Some("b"))).await.unwrap();

        assert_eq!(
            page,
            Page {
                nodes: vec![launch(1, Some("a"))],
                cursor: Some("a".into()),
                has_more: false,
            },
        );
    }

    #[tokio::test]
    async fn respects_cursor_not_found() {
        let svc = service(vec![launch(1, None), launch(999, None)]);

        let page = svc.execute(args(20, Some("a"))).await.unwrap();

        assert_eq!(
            page,
            Page {
                nodes: vec![launch(999, None), launch(1, None)],
                cursor: None,
                has_more: false,
            },
        );
    }

    #[tokio::test]
    async fn does_not_overflow_when_cursor_at_end() {
        let svc = service(vec![launch(1, Some("a")), launch(999, Some("b"))]);

        let page = svc.execute(args(20, Some("a"))).await.unwrap();

        assert_eq!(page, Page::empty());
    }

    #[tokio::test]
    async fn respects_both_page_size_and_cursor() {
        let svc = service(vec![
            launch(1, Some("a")),
            launch(999, Some("b")),
            launch(123, Some("c")),
        ]);

        let page = svc.execute(args(1, Some("c"))).await.unwrap();

        assert_eq!(
            page,
            Page {
                nodes: vec![launch(999, Some("b"))],
                cursor: Some("b".into()),
                has_more: true,
            },
        );
    }

    #[tokio::test]
    async fn looks_up_single_launch() {
        let svc = service(vec![launch(999, None)]);

        let found = svc.execute(ById::by(999.into())).await.unwrap();
        let missing = svc.execute(ById::by(1.into())).await.unwrap();

        assert_eq!(found, Some(launch(999, None)));
        assert_eq!(missing, None);
    }
}
