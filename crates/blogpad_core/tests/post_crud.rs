use blogpad_core::db::open_db_in_memory;
use blogpad_core::{
    BlogRepository, NewBlog, NewPost, PostRepository, PostValidationError, RepoError,
    SqliteBlogRepository, SqlitePostRepository,
};

#[test]
fn added_post_references_the_selected_blog() {
    let conn = open_db_in_memory().unwrap();
    let blogs = SqliteBlogRepository::new(&conn);
    let posts = SqlitePostRepository::new(&conn);

    let tech = blogs.add_blog(&NewBlog::new("Tech")).unwrap();
    blogs.add_blog(&NewBlog::new("Travel")).unwrap();

    posts
        .add_post(&NewPost::new(tech, "Launch", "v1 released"))
        .unwrap();

    let listed = posts.list_posts_for_blog(tech).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].blog_id, tech);
    assert_eq!(listed[0].blog_name, "Tech");
    assert_eq!(listed[0].title, "Launch");
    assert_eq!(listed[0].content, "v1 released");
}

#[test]
fn list_all_posts_eager_loads_every_owning_blog() {
    let conn = open_db_in_memory().unwrap();
    let blogs = SqliteBlogRepository::new(&conn);
    let posts = SqlitePostRepository::new(&conn);

    let tech = blogs.add_blog(&NewBlog::new("Tech")).unwrap();
    let travel = blogs.add_blog(&NewBlog::new("Travel")).unwrap();
    posts.add_post(&NewPost::new(tech, "Launch", "")).unwrap();
    posts.add_post(&NewPost::new(travel, "Packing", "")).unwrap();
    posts.add_post(&NewPost::new(tech, "Retro", "")).unwrap();

    let all = posts.list_all_posts().unwrap();
    assert_eq!(all.len(), 3);
    // Ordered by post id, each carrying its blog name.
    let pairs: Vec<(&str, &str)> = all
        .iter()
        .map(|p| (p.blog_name.as_str(), p.title.as_str()))
        .collect();
    assert_eq!(
        pairs,
        [("Tech", "Launch"), ("Travel", "Packing"), ("Tech", "Retro")]
    );
}

#[test]
fn per_blog_listing_filters_other_blogs_out() {
    let conn = open_db_in_memory().unwrap();
    let blogs = SqliteBlogRepository::new(&conn);
    let posts = SqlitePostRepository::new(&conn);

    let tech = blogs.add_blog(&NewBlog::new("Tech")).unwrap();
    let travel = blogs.add_blog(&NewBlog::new("Travel")).unwrap();
    posts.add_post(&NewPost::new(tech, "Launch", "")).unwrap();
    posts.add_post(&NewPost::new(travel, "Packing", "")).unwrap();

    let travel_posts = posts.list_posts_for_blog(travel).unwrap();
    assert_eq!(travel_posts.len(), 1);
    assert_eq!(travel_posts[0].title, "Packing");
}

#[test]
fn union_of_per_blog_listings_matches_list_all() {
    let conn = open_db_in_memory().unwrap();
    let blogs = SqliteBlogRepository::new(&conn);
    let posts = SqlitePostRepository::new(&conn);

    let tech = blogs.add_blog(&NewBlog::new("Tech")).unwrap();
    let travel = blogs.add_blog(&NewBlog::new("Travel")).unwrap();
    posts.add_post(&NewPost::new(tech, "Launch", "")).unwrap();
    posts.add_post(&NewPost::new(travel, "Packing", "")).unwrap();

    let total = posts.list_all_posts().unwrap().len();
    let summed = posts.list_posts_for_blog(tech).unwrap().len()
        + posts.list_posts_for_blog(travel).unwrap().len();
    assert_eq!(total, summed);
}

#[test]
fn add_post_rejects_empty_title_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    let blogs = SqliteBlogRepository::new(&conn);
    let posts = SqlitePostRepository::new(&conn);

    let tech = blogs.add_blog(&NewBlog::new("Tech")).unwrap();

    let err = posts.add_post(&NewPost::new(tech, "", "body")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::PostValidation(PostValidationError::EmptyTitle)
    ));
    assert!(posts.list_all_posts().unwrap().is_empty());
}

#[test]
fn empty_content_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let blogs = SqliteBlogRepository::new(&conn);
    let posts = SqlitePostRepository::new(&conn);

    let tech = blogs.add_blog(&NewBlog::new("Tech")).unwrap();
    posts.add_post(&NewPost::new(tech, "Untitled", "")).unwrap();

    let listed = posts.list_posts_for_blog(tech).unwrap();
    assert_eq!(listed[0].content, "");
}

#[test]
fn add_post_for_missing_blog_hits_foreign_key() {
    let conn = open_db_in_memory().unwrap();
    let posts = SqlitePostRepository::new(&conn);

    let err = posts
        .add_post(&NewPost::new(42, "Orphan", "no owner"))
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert!(posts.list_all_posts().unwrap().is_empty());
}

#[test]
fn listing_posts_for_unknown_blog_returns_empty() {
    let conn = open_db_in_memory().unwrap();
    let posts = SqlitePostRepository::new(&conn);

    assert!(posts.list_posts_for_blog(7).unwrap().is_empty());
}
