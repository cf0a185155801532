/// `/` で返す使い方ページ
pub const MAIN_PAGE: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Placer!</title>
<style>
body { font-family: sans-serif; margin: 2rem auto; max-width: 40rem; }
pre { background: #f4f4f4; padding: 0.75rem; }
</style>
</head>
<body>
<h1>Placer!</h1>
<p>Put the image dimensions (in px) in the URL to get a placeholder image.<br />Example:</p>
<pre>
&lt;img src="/WIDTHxHEIGHT.jpg" /&gt;
&lt;img src="/220x64.jpg" /&gt;
</pre>
<p>will generate:</p>
<a href="/220x64.jpg"><img src="/220x64.jpg" alt="220x64 placeholder" /></a>
<p>Also accepted: <code>/WIDTH</code> (square), <code>/WIDTH/HEIGHT</code>, with or without <code>.jpg</code>.</p>
</body>
</html>
"#;
