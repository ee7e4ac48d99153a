pub mod common;

use bakery_api::{BakedGoodRecord, BakeryRecord, Query};
use common::TestContext;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

// cargo test --test query_tests -- --nocapture
#[tokio::test]
async fn list_bakeries_matches_table_contents() {
    let ctx = TestContext::new().await;
    assert!(Query::list_bakeries(&ctx.db).await.unwrap().is_empty());

    let a = ctx.create_bakery("Delightful donuts").await;
    let b = ctx.create_bakery("Incredible crullers").await;
    let c = ctx.create_bakery("My Bakery").await;

    let listed: BTreeSet<(i32, String)> = Query::list_bakeries(&ctx.db)
        .await
        .unwrap()
        .into_iter()
        .map(|BakeryRecord { id, name }| (id, name))
        .collect();

    assert_eq!(
        listed,
        BTreeSet::from([
            (a, "Delightful donuts".to_owned()),
            (b, "Incredible crullers".to_owned()),
            (c, "My Bakery".to_owned()),
        ])
    );
}

#[tokio::test]
async fn find_bakery_by_id() {
    let ctx = TestContext::new().await;
    let id = ctx.create_bakery("My Bakery").await;

    assert_eq!(
        Query::find_bakery_by_id(&ctx.db, id).await.unwrap(),
        Some(BakeryRecord {
            id,
            name: "My Bakery".to_owned(),
        })
    );
    assert_eq!(
        Query::find_bakery_by_id(&ctx.db, 999_999_999).await.unwrap(),
        None
    );
}

#[tokio::test]
async fn baked_goods_by_price_are_non_increasing() {
    let ctx = TestContext::new().await;
    let bakery = ctx.create_bakery("Delightful donuts").await;
    for (name, price) in [
        ("Croissant", 3.25),
        ("Cheesecake", 8.5),
        ("Baguette", 2.0),
        ("Eclair", 4.75),
        ("Macaron", 1.5),
    ] {
        ctx.create_baked_good(name, price, Some(bakery)).await;
    }

    let goods = Query::list_baked_goods_by_price_desc(&ctx.db).await.unwrap();
    assert_eq!(goods.len(), 5);
    assert!(goods.windows(2).all(|w| w[0].price >= w[1].price));
    assert_eq!(
        goods.iter().map(|g| g.name.as_str()).collect::<Vec<_>>(),
        ["Cheesecake", "Eclair", "Croissant", "Baguette", "Macaron"]
    );
}

#[tokio::test]
async fn equal_prices_are_ordered_by_id() {
    let ctx = TestContext::new().await;
    let second = ctx.create_baked_good("Sourdough", 5.0, None).await;
    let cheap = ctx.create_baked_good("Bagel", 1.0, None).await;
    let third = ctx.create_baked_good("Rye", 5.0, None).await;

    let ids: Vec<i32> = Query::list_baked_goods_by_price_desc(&ctx.db)
        .await
        .unwrap()
        .into_iter()
        .map(|g| g.id)
        .collect();
    assert_eq!(ids, vec![second, third, cheap]);

    assert_eq!(
        Query::find_most_expensive_baked_good(&ctx.db).await.unwrap(),
        Some(BakedGoodRecord {
            id: second,
            name: "Sourdough".to_owned(),
            price: 5.0,
        })
    );
}

#[tokio::test]
async fn most_expensive_has_the_maximum_price() {
    let ctx = TestContext::new().await;
    assert_eq!(
        Query::find_most_expensive_baked_good(&ctx.db).await.unwrap(),
        None
    );

    ctx.create_baked_good("Croissant", 3.25, None).await;
    ctx.create_baked_good("Cheesecake", 8.5, None).await;
    ctx.create_baked_good("Baguette", 2.0, None).await;

    let all = Query::list_baked_goods_by_price_desc(&ctx.db).await.unwrap();
    let max = all.iter().map(|g| g.price).fold(f64::MIN, f64::max);

    let most_expensive = Query::find_most_expensive_baked_good(&ctx.db)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(most_expensive.price, max);
    assert_eq!(most_expensive.name, "Cheesecake");
}
