//! Exports the portfolio site's standalone HTML and CSS source as a single
//! paginated PDF, the way the hosting backend serves it for download.

use listing_pdf::layout::{PageGeometry, Paginator, TextBlock};
use listing_pdf::Info;

const HTML_SOURCE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Senior Software Engineer — Portfolio</title>
  <meta name="description" content="Senior Software Engineer portfolio — projects, experience, and contact." />
  <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
  <link href="https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700;800&display=swap" rel="stylesheet">
  <link rel="stylesheet" href="styles.css" />
</head>
<body>
  <a class="skip-link" href="#main">Skip to content</a>
  <header class="site-header">
    <div class="container">
      <a class="brand" href="#"> <span class="brand-badge" aria-hidden="true">•</span> <span class="brand-text">Your Name</span> </a>
      <input type="checkbox" id="nav-toggle" class="nav-toggle" aria-hidden="true" />
      <label for="nav-toggle" class="nav-toggle-label" aria-label="Toggle menu" role="button" tabindex="0">
        <svg class="icon" viewBox="0 0 24 24" aria-hidden="true"><path d="M3 6h18M3 12h18M3 18h18" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>
        <svg class="icon close" viewBox="0 0 24 24" aria-hidden="true"><path d="M6 6l12 12M6 18L18 6" stroke="currentColor" stroke-width="2" stroke-linecap="round"/></svg>
      </label>
      <nav class="nav">
        <a href="#work">Work</a>
        <a href="#about">About</a>
        <a href="#contact">Contact</a>
        <a class="btn btn-outline small" href="resume.pdf" target="_blank" rel="noopener">Resume</a>
        <div class="nav-socials">
          <a class="icon-btn" href="https://github.com/yourhandle" target="_blank" rel="noopener" aria-label="GitHub"></a>
          <a class="icon-btn" href="https://www.linkedin.com/in/yourhandle" target="_blank" rel="noopener" aria-label="LinkedIn"></a>
        </div>
      </nav>
    </div>
  </header>
  <main id="main">
    <section class="hero"> ... </section>
    <section id="work" class="section"> ... </section>
    <section id="about" class="section"> ... </section>
    <section id="contact" class="section"> ... </section>
  </main>
  <footer class="site-footer"> ... </footer>
  <script>document.getElementById('year') && (document.getElementById('year').textContent = new Date().getFullYear());</script>
</body>
</html>
"##;

const CSS_SOURCE: &str = r##":root{
  --bg: #0a0b0f;
  --panel: #0f1117;
  --muted: #9aa4b2;
  --text: #e6e9ef;
  --accent: #ff6363;
  --accent-2: #7c3aed;
  --ring: #2b2f3a;
  --card: #121420;
  --card-2: #16192a;
  --grad-1: #fa709a;
  --grad-2: #fee140;
  --grad-3: #7f53ac;
  --grad-4: #647dee;
  --shadow: 0 10px 30px rgba(0,0,0,.35), 0 2px 10px rgba(0,0,0,.25);
}
/* Full CSS omitted for brevity in PDF header; see full site source for details */
"##;

fn main() {
    env_logger::init();

    let paginator = Paginator::new(PageGeometry::listing_letter())
        .expect("the listing geometry is valid")
        .with_cover("Senior Portfolio — HTML & CSS Source", "Generated on demand");

    let blocks = [
        TextBlock::new("index.html", HTML_SOURCE),
        TextBlock::new("styles.css", CSS_SOURCE),
    ];
    let mut document = paginator.paginate(&blocks);
    document.set_info(
        Info::new()
            .title("Senior Portfolio — HTML & CSS Source")
            .subject("Standalone HTML and CSS source listing"),
    );

    let mut out =
        std::fs::File::create("portfolio_html_css_source.pdf").expect("can create output file");
    document.write(&mut out).expect("can write PDF");
}
